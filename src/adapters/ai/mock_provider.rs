//! Scripted AI provider for tests and offline runs.
//!
//! Replies are queued up front and handed out in order. Every request is
//! recorded so callers can inspect the prompt that was sent. Once the queue
//! is drained each call answers with [`FALLBACK_REPLY`].

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Text returned when no reply is queued.
pub const FALLBACK_REPLY: &str = "Mock summary";

const MOCK_MODEL: &str = "mock-model-1";

/// Provider failures that can be queued in place of a reply.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { message: String },
    ContentFiltered { reason: String },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    EmptyContent,
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { message } => AIError::rate_limited(message),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::EmptyContent => AIError::EmptyContent,
        }
    }
}

type Reply = Result<String, MockError>;

/// Queue-backed [`AIProvider`].
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.enqueue(Ok(content.into()))
    }

    /// Queues a failure.
    pub fn with_error(self, error: MockError) -> Self {
        self.enqueue(Err(error))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Requests received so far, oldest first.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn enqueue(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls.lock().unwrap().push(request);

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(FALLBACK_REPLY.to_string()));

        let content = reply?;
        Ok(CompletionResponse {
            usage: TokenUsage::new(10, content.split_whitespace().count() as u32),
            content,
            model: MOCK_MODEL.to_string(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MessageRole;

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest::new().with_message(MessageRole::User, text)
    }

    #[tokio::test]
    async fn replies_are_served_in_queue_order() {
        let provider = MockAIProvider::new()
            .with_response("- first")
            .with_error(MockError::AuthenticationFailed)
            .with_response("- third");

        let first = provider.complete(request("a")).await.unwrap();
        let second = provider.complete(request("b")).await;
        let third = provider.complete(request("c")).await.unwrap();

        assert_eq!(first.content, "- first");
        assert_eq!(first.model, MOCK_MODEL);
        assert!(matches!(second, Err(AIError::AuthenticationFailed)));
        assert_eq!(third.content, "- third");
    }

    #[tokio::test]
    async fn drained_queue_falls_back() {
        let provider = MockAIProvider::new();

        let reply = provider.complete(request("x")).await.unwrap();

        assert_eq!(reply.content, FALLBACK_REPLY);
        assert_eq!(reply.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn records_every_request_even_failed_ones() {
        let provider = MockAIProvider::new().with_error(MockError::RateLimited {
            message: "quota".to_string(),
        });

        let result = provider.complete(request("Summarize me")).await;

        assert!(matches!(result, Err(AIError::RateLimited { .. })));
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.get_calls()[0].messages[0].content, "Summarize me");
    }

    #[test]
    fn mock_errors_map_to_provider_errors() {
        assert!(matches!(
            AIError::from(MockError::EmptyContent),
            AIError::EmptyContent
        ));
        assert!(matches!(
            AIError::from(MockError::ContentFiltered {
                reason: "SAFETY".to_string()
            }),
            AIError::ContentFiltered { .. }
        ));
    }
}
