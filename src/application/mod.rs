//! Application layer - Commands, Handlers and the document renderer.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Each handler is one user action; failures are reported as [`ActionError`]
//! and never end the session.

mod errors;
pub mod handlers;
mod renderer;
mod session;

pub use errors::ActionError;
pub use handlers::{
    ExportSummaryHandler, ExportedSummary, SummarizeTextCommand, SummarizeTextHandler,
    SUMMARY_PROMPT,
};
pub use renderer::{DocumentRenderer, RenderError, RenderedDocument};
pub use session::SummarySession;
