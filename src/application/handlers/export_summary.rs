//! ExportSummaryHandler - Command handler for saving a summary as PDF.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::application::errors::ActionError;
use crate::application::renderer::{DocumentRenderer, RenderedDocument};
use crate::application::session::SummarySession;
use crate::domain::SummaryText;
use crate::ports::{DocumentFileStorage, StoredFile};

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportedSummary {
    pub filename: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub checksum: String,
    pub captured_at: NaiveDateTime,
    pub word_count: usize,
    pub page_count: usize,
}

impl ExportedSummary {
    fn new(rendered: RenderedDocument, stored: StoredFile) -> Self {
        Self {
            filename: rendered.filename,
            path: stored.path,
            size_bytes: stored.size_bytes,
            checksum: stored.checksum,
            captured_at: rendered.captured_at,
            word_count: rendered.word_count,
            page_count: rendered.page_count,
        }
    }
}

/// Handler for exporting summaries.
///
/// Renders first and persists only a complete document, so a rendering
/// failure never leaves a file behind.
pub struct ExportSummaryHandler {
    renderer: DocumentRenderer,
    storage: Arc<dyn DocumentFileStorage>,
}

impl ExportSummaryHandler {
    pub fn new(renderer: DocumentRenderer, storage: Arc<dyn DocumentFileStorage>) -> Self {
        Self { renderer, storage }
    }

    pub async fn handle(&self, summary: &SummaryText) -> Result<ExportedSummary, ActionError> {
        let rendered = self.renderer.render(summary.as_str())?;
        self.persist(rendered).await
    }

    /// Same as [`handle`](Self::handle) with an explicit capture instant.
    pub async fn handle_at(
        &self,
        summary: &SummaryText,
        captured_at: NaiveDateTime,
    ) -> Result<ExportedSummary, ActionError> {
        let rendered = self.renderer.render_at(summary.as_str(), captured_at)?;
        self.persist(rendered).await
    }

    /// Exports the session's last summary.
    pub async fn export_last(&self, session: &SummarySession) -> Result<ExportedSummary, ActionError> {
        let summary = session.last_summary().ok_or(ActionError::NothingToExport)?;
        self.handle(summary).await
    }

    async fn persist(&self, rendered: RenderedDocument) -> Result<ExportedSummary, ActionError> {
        let stored = self
            .storage
            .write(&rendered.filename, &rendered.bytes)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, filename = %rendered.filename, "export failed");
                e
            })?;

        tracing::info!(
            path = %stored.path.display(),
            content_type = rendered.content_type(),
            checksum = %stored.checksum,
            "summary exported"
        );
        Ok(ExportedSummary::new(rendered, stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ComposeError, ComposedDocument, PageComposer, StorageError};
    use crate::domain::document::DocumentLayout;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct StaticComposer {
        available: bool,
    }

    impl PageComposer for StaticComposer {
        fn compose(&self, _layout: &DocumentLayout) -> Result<ComposedDocument, ComposeError> {
            Ok(ComposedDocument {
                bytes: b"%PDF-1.7".to_vec(),
                page_count: 1,
            })
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    #[derive(Default)]
    struct RecordingStorage {
        writes: Mutex<Vec<(String, Vec<u8>)>>,
        fail: bool,
    }

    #[async_trait]
    impl DocumentFileStorage for RecordingStorage {
        async fn write(&self, filename: &str, content: &[u8]) -> Result<StoredFile, StorageError> {
            if self.fail {
                return Err(StorageError::io("disk full"));
            }
            self.writes
                .lock()
                .unwrap()
                .push((filename.to_string(), content.to_vec()));
            Ok(StoredFile {
                path: self.file_path(filename),
                size_bytes: content.len() as u64,
                checksum: "abc".to_string(),
            })
        }

        async fn read(&self, filename: &str) -> Result<Vec<u8>, StorageError> {
            Err(StorageError::not_found(filename))
        }

        fn file_path(&self, filename: &str) -> PathBuf {
            PathBuf::from("/out").join(filename)
        }
    }

    fn handler(available: bool, storage: Arc<RecordingStorage>) -> ExportSummaryHandler {
        let renderer = DocumentRenderer::new(Arc::new(StaticComposer { available }));
        ExportSummaryHandler::new(renderer, storage)
    }

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap()
    }

    #[tokio::test]
    async fn export_writes_rendered_bytes_under_timestamped_name() {
        let storage = Arc::new(RecordingStorage::default());
        let handler = handler(true, storage.clone());

        let exported = handler
            .handle_at(&SummaryText::new("a b c"), instant())
            .await
            .unwrap();

        assert_eq!(exported.filename, "AI_Summary_20240305_140709.pdf");
        assert_eq!(exported.path, PathBuf::from("/out/AI_Summary_20240305_140709.pdf"));
        assert_eq!(exported.word_count, 3);
        let writes = storage.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].1, b"%PDF-1.7".to_vec());
    }

    #[tokio::test]
    async fn unavailable_renderer_writes_nothing() {
        let storage = Arc::new(RecordingStorage::default());
        let handler = handler(false, storage.clone());

        let result = handler.handle(&SummaryText::new("x")).await;

        assert!(matches!(result, Err(ActionError::RenderingUnavailable(_))));
        assert!(storage.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let storage = Arc::new(RecordingStorage {
            fail: true,
            ..Default::default()
        });
        let handler = handler(true, storage);

        let result = handler.handle(&SummaryText::new("x")).await;

        assert!(matches!(result, Err(ActionError::Storage(StorageError::Io(_)))));
    }

    #[tokio::test]
    async fn exporting_empty_session_fails() {
        let handler = handler(true, Arc::new(RecordingStorage::default()));

        let result = handler.export_last(&SummarySession::new()).await;

        assert!(matches!(result, Err(ActionError::NothingToExport)));
    }

    #[tokio::test]
    async fn exporting_session_uses_last_summary() {
        let storage = Arc::new(RecordingStorage::default());
        let handler = handler(true, storage.clone());
        let mut session = SummarySession::new();
        session.record(Ok(SummaryText::new("one two"))).unwrap();

        let exported = handler.export_last(&session).await.unwrap();

        assert_eq!(exported.word_count, 2);
        assert_eq!(storage.writes.lock().unwrap().len(), 1);
    }
}
