//! Page Composer Port - Paginated document composition interface.
//!
//! This port defines the contract for turning an engine-neutral
//! [`DocumentLayout`] into the bytes of a paginated document file. The
//! renderer depends on this trait, while adapters (like `PdfPageComposer`)
//! provide the implementation.

use thiserror::Error;

use crate::domain::document::DocumentLayout;
use crate::domain::markup::MarkupError;

/// Port for composing a laid-out document into file bytes.
///
/// # Contract
///
/// Implementations must:
/// - Place every block in order, flowing onto new pages as needed
/// - Interpret block markup (emphasis, line breaks, entities, colors)
/// - Return bytes only once the whole document is composed
/// - Report malformed markup as [`ComposeError::Markup`]
///
/// # Usage
///
/// ```rust,ignore
/// let composer: &dyn PageComposer = get_composer();
///
/// if composer.is_available() {
///     let bytes = composer.compose(&layout)?;
/// }
/// ```
pub trait PageComposer: Send + Sync {
    /// Compose the layout into a complete document.
    ///
    /// # Errors
    ///
    /// Returns `ComposeError` if any block cannot be placed.
    fn compose(&self, layout: &DocumentLayout) -> Result<ComposedDocument, ComposeError>;

    /// Check whether the composition backend can run in this environment.
    fn is_available(&self) -> bool;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Output of a successful composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocument {
    /// The complete document file.
    pub bytes: Vec<u8>,
    /// Number of pages produced.
    pub page_count: usize,
}

/// Errors that can occur while composing a document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    /// Block markup could not be interpreted.
    #[error("invalid markup: {0}")]
    Markup(#[from] MarkupError),

    /// Geometry leaves no room for content.
    #[error("layout error: {0}")]
    Layout(String),
}

impl ComposeError {
    /// Create a layout error.
    pub fn layout(reason: impl Into<String>) -> Self {
        Self::Layout(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_errors_convert() {
        let err: ComposeError = MarkupError::UnknownTag("blink".to_string()).into();
        assert_eq!(err.to_string(), "invalid markup: unknown tag <blink>");
    }

    #[test]
    fn layout_error_displays_reason() {
        assert_eq!(
            ComposeError::layout("no room").to_string(),
            "layout error: no room"
        );
    }
}
