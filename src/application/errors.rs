//! Errors surfaced by the user-facing actions.

use thiserror::Error;

use super::renderer::RenderError;
use crate::ports::{AIError, StorageError};

/// Failure of one summarize or export action.
///
/// Every variant is terminal for the current action only; the shell reports
/// it and keeps running.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The submitted text was empty or whitespace.
    #[error("Please enter some text to summarize.")]
    EmptyInput,

    /// No API key was configured at startup.
    #[error("Gemini API key is not configured. Set GEMINI_API_KEY in .env")]
    ConfigurationMissing,

    /// The provider call failed or returned no text.
    #[error("Summarization failed: {0}")]
    SummarizationFailed(#[from] AIError),

    /// The document composition backend cannot run here.
    #[error("PDF generation is not available: {0}")]
    RenderingUnavailable(String),

    /// Composition raised while building the document.
    #[error("PDF generation failed: {0}")]
    RenderingFailed(String),

    /// The rendered document could not be saved.
    #[error("Could not save the document: {0}")]
    Storage(#[from] StorageError),

    /// Export was requested before any summary was produced.
    #[error("There is no summary to export yet.")]
    NothingToExport,
}

impl From<RenderError> for ActionError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Unavailable(reason) => ActionError::RenderingUnavailable(reason),
            RenderError::Failed(reason) => ActionError::RenderingFailed(reason),
        }
    }
}
