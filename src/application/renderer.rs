//! Document Renderer - turns summary text into a downloadable PDF.
//!
//! The renderer reads the wall clock once per call; that single instant
//! drives both the file name and the footer timestamp.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime, Timelike};
use thiserror::Error;

use crate::domain::document::{document_filename, DocumentLayout, DocumentTheme, CONTENT_TYPE};
use crate::domain::SummaryText;
use crate::ports::PageComposer;

/// Rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The composition backend reported itself unavailable.
    #[error("{0}")]
    Unavailable(String),

    /// Composition raised while building the document.
    #[error("{0}")]
    Failed(String),
}

/// A fully composed document, ready to offer for download or save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// `AI_Summary_YYYYMMDD_HHMMSS.pdf`
    pub filename: String,
    pub bytes: Vec<u8>,
    pub captured_at: NaiveDateTime,
    /// Whitespace-token count of the raw summary.
    pub word_count: usize,
    pub page_count: usize,
}

impl RenderedDocument {
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}

/// Produces summary documents through a [`PageComposer`].
#[derive(Clone)]
pub struct DocumentRenderer {
    composer: Arc<dyn PageComposer>,
    theme: DocumentTheme,
}

impl DocumentRenderer {
    pub fn new(composer: Arc<dyn PageComposer>) -> Self {
        Self {
            composer,
            theme: DocumentTheme::default(),
        }
    }

    /// Renders `summary` stamped with the current local time.
    pub fn render(&self, summary: &str) -> Result<RenderedDocument, RenderError> {
        self.render_at(summary, Local::now().naive_local())
    }

    /// Renders `summary` stamped with `captured_at` (sub-second part dropped).
    ///
    /// The backend is checked before any work, and bytes are returned only
    /// once the whole document has been composed.
    pub fn render_at(
        &self,
        summary: &str,
        captured_at: NaiveDateTime,
    ) -> Result<RenderedDocument, RenderError> {
        if !self.composer.is_available() {
            tracing::warn!(backend = self.composer.name(), "composition backend unavailable");
            return Err(RenderError::Unavailable(format!(
                "the {} backend cannot run in this environment",
                self.composer.name()
            )));
        }

        let captured_at = captured_at.with_nanosecond(0).unwrap_or(captured_at);
        let summary = SummaryText::new(summary);
        let layout = DocumentLayout::for_summary(&summary, captured_at, &self.theme);

        let composed = self.composer.compose(&layout).map_err(|e| {
            tracing::warn!(error = %e, "document composition failed");
            RenderError::Failed(e.to_string())
        })?;

        if composed.bytes.is_empty() {
            return Err(RenderError::Failed("composer produced no output".to_string()));
        }

        let filename = document_filename(captured_at);
        tracing::info!(
            filename = %filename,
            pages = composed.page_count,
            size_bytes = composed.bytes.len(),
            "summary document rendered"
        );

        Ok(RenderedDocument {
            filename,
            bytes: composed.bytes,
            captured_at,
            word_count: summary.word_count(),
            page_count: composed.page_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markup::MarkupError;
    use crate::ports::{ComposeError, ComposedDocument};
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeComposer {
        available: bool,
        result: Result<ComposedDocument, ComposeError>,
        calls: AtomicUsize,
    }

    impl FakeComposer {
        fn ok() -> Self {
            Self {
                available: true,
                result: Ok(ComposedDocument {
                    bytes: b"%PDF-1.7 fake".to_vec(),
                    page_count: 1,
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn unavailable() -> Self {
            Self {
                available: false,
                ..Self::ok()
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(MarkupError::UnknownTag("x".to_string()).into()),
                ..Self::ok()
            }
        }
    }

    impl PageComposer for FakeComposer {
        fn compose(&self, _layout: &DocumentLayout) -> Result<ComposedDocument, ComposeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn name(&self) -> &'static str {
            "fake"
        }
    }

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_nano_opt(14, 7, 9, 123_456_789)
            .unwrap()
    }

    #[test]
    fn filename_uses_capture_instant() {
        let renderer = DocumentRenderer::new(Arc::new(FakeComposer::ok()));

        let doc = renderer.render_at("hello world", instant()).unwrap();

        assert_eq!(doc.filename, "AI_Summary_20240305_140709.pdf");
        assert_eq!(doc.captured_at.nanosecond(), 0);
        assert_eq!(doc.word_count, 2);
        assert_eq!(doc.content_type(), "application/pdf");
    }

    #[test]
    fn unavailable_backend_is_checked_before_composing() {
        let composer = Arc::new(FakeComposer::unavailable());
        let renderer = DocumentRenderer::new(composer.clone());

        let result = renderer.render_at("hello", instant());

        assert!(matches!(result, Err(RenderError::Unavailable(_))));
        assert_eq!(composer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn composition_errors_become_failed() {
        let renderer = DocumentRenderer::new(Arc::new(FakeComposer::failing()));

        let result = renderer.render_at("hello", instant());

        assert!(matches!(result, Err(RenderError::Failed(ref r)) if r.contains("unknown tag")));
    }

    #[test]
    fn render_reads_the_clock() {
        let renderer = DocumentRenderer::new(Arc::new(FakeComposer::ok()));
        let before = Local::now().naive_local().with_nanosecond(0).unwrap();

        let doc = renderer.render("x").unwrap();

        assert!(doc.captured_at >= before);
        assert!(doc.filename.starts_with("AI_Summary_"));
    }
}
