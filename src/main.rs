use std::sync::Arc;

use anyhow::Context;

use text_summarizer::adapters::{GeminiProvider, LocalDocumentFileStorage, PdfPageComposer};
use text_summarizer::application::{DocumentRenderer, ExportSummaryHandler, SummarizeTextHandler};
use text_summarizer::config::AppConfig;
use text_summarizer::shell::Shell;
use text_summarizer::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    telemetry::init(&config.logging).context("failed to install logging")?;

    let summarize = match config.ai.gemini_config() {
        Some(gemini) => {
            tracing::info!(model = %gemini.model, "Gemini provider configured");
            SummarizeTextHandler::new(Arc::new(GeminiProvider::new(gemini)?))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY is not set; summarization is disabled");
            SummarizeTextHandler::unconfigured()
        }
    };

    let renderer = DocumentRenderer::new(Arc::new(PdfPageComposer::new()));
    let storage = Arc::new(LocalDocumentFileStorage::new(&config.export.output_dir));
    let export = ExportSummaryHandler::new(renderer, storage);

    Shell::new(summarize, export).run().await
}
