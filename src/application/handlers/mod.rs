//! Command handlers for the two user-facing actions.

mod export_summary;
mod summarize_text;

pub use export_summary::{ExportSummaryHandler, ExportedSummary};
pub use summarize_text::{
    summary_prompt, SummarizeTextCommand, SummarizeTextHandler, SUMMARY_PROMPT,
};
