//! SummarizeTextHandler - Command handler for summarizing pasted text.

use std::sync::Arc;

use crate::application::errors::ActionError;
use crate::domain::SummaryText;
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole};

/// Instruction placed before the user's text.
pub const SUMMARY_PROMPT: &str = "You are a text summarizer. Read the given text and summarize it in a clear, concise, and informative way within 200–250 words. Use bullet points for key takeaways if suitable.\n\nText:\n\n";

/// Command to summarize a block of text.
#[derive(Debug, Clone)]
pub struct SummarizeTextCommand {
    pub text: String,
}

impl SummarizeTextCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Builds the single user turn sent to the provider.
pub fn summary_prompt(text: &str) -> String {
    format!("{}{}", SUMMARY_PROMPT, text)
}

/// Handler for summarization requests.
///
/// Holds no provider when the API key was missing at startup; every request
/// then fails with [`ActionError::ConfigurationMissing`] without a call.
pub struct SummarizeTextHandler {
    provider: Option<Arc<dyn AIProvider>>,
}

impl SummarizeTextHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn handle(&self, cmd: SummarizeTextCommand) -> Result<SummaryText, ActionError> {
        // 1. Validate input
        if cmd.text.trim().is_empty() {
            return Err(ActionError::EmptyInput);
        }

        // 2. Require a configured provider
        let provider = self
            .provider
            .as_ref()
            .ok_or(ActionError::ConfigurationMissing)?;

        // 3. One attempt, no retries
        let request =
            CompletionRequest::new().with_message(MessageRole::User, summary_prompt(&cmd.text));
        let response = provider.complete(request).await.map_err(|e| {
            tracing::warn!(error = %e, provider = %provider.provider_info().name, "summarization failed");
            ActionError::SummarizationFailed(e)
        })?;

        let summary = SummaryText::new(response.content);
        if summary.is_blank() {
            return Err(ActionError::SummarizationFailed(AIError::EmptyContent));
        }

        tracing::info!(
            input_words = crate::domain::summary::word_count(&cmd.text),
            summary_words = summary.word_count(),
            model = %response.model,
            "summary generated"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};

    #[tokio::test]
    async fn returns_provider_text_as_summary() {
        let provider = Arc::new(MockAIProvider::new().with_response("- Revenue up 12%"));
        let handler = SummarizeTextHandler::new(provider.clone());

        let summary = handler
            .handle(SummarizeTextCommand::new("Quarterly report..."))
            .await
            .unwrap();

        assert_eq!(summary.as_str(), "- Revenue up 12%");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn sends_prompt_followed_by_text_as_single_user_turn() {
        let provider = Arc::new(MockAIProvider::new());
        let handler = SummarizeTextHandler::new(provider.clone());

        handler
            .handle(SummarizeTextCommand::new("The text."))
            .await
            .unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls[0].messages.len(), 1);
        assert_eq!(calls[0].messages[0].role, MessageRole::User);
        assert_eq!(calls[0].messages[0].content, format!("{}The text.", SUMMARY_PROMPT));
        assert!(calls[0].messages[0].content.contains("within 200–250 words"));
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_a_call() {
        let provider = Arc::new(MockAIProvider::new());
        let handler = SummarizeTextHandler::new(provider.clone());

        let result = handler.handle(SummarizeTextCommand::new("  \n\t ")).await;

        assert!(matches!(result, Err(ActionError::EmptyInput)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn unconfigured_handler_reports_missing_configuration() {
        let handler = SummarizeTextHandler::unconfigured();

        let result = handler.handle(SummarizeTextCommand::new("some text")).await;

        assert!(!handler.is_configured());
        assert!(matches!(result, Err(ActionError::ConfigurationMissing)));
    }

    #[tokio::test]
    async fn provider_errors_become_summarization_failures() {
        let provider = Arc::new(MockAIProvider::new().with_error(MockError::AuthenticationFailed));
        let handler = SummarizeTextHandler::new(provider.clone());

        let result = handler.handle(SummarizeTextCommand::new("text")).await;

        assert!(matches!(
            result,
            Err(ActionError::SummarizationFailed(AIError::AuthenticationFailed))
        ));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn blank_reply_is_a_failure() {
        let provider = Arc::new(MockAIProvider::new().with_response("   "));
        let handler = SummarizeTextHandler::new(provider);

        let result = handler.handle(SummarizeTextCommand::new("text")).await;

        assert!(matches!(
            result,
            Err(ActionError::SummarizationFailed(AIError::EmptyContent))
        ));
    }
}
