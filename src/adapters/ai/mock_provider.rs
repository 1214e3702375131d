//! Mock chat provider for testing.
//!
//! Configurable to return scripted responses or inject errors, with call
//! recording so tests can assert on the prompts the pipelines built.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{ChatError, ChatProvider, CompletionRequest, CompletionResponse};

/// A scripted mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion with this content.
    Success(String),
    /// Return this error.
    Error(ChatError),
}

/// Mock chat provider for testing.
///
/// Responses are consumed in FIFO order; when the queue is empty the provider
/// answers with [`ChatError::EmptyResponse`].
#[derive(Debug, Clone, Default)]
pub struct MockChatProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockChatProvider {
    /// Creates a new mock provider with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("mock responses lock")
            .push_back(MockResponse::Success(content.into()));
        self
    }

    /// Queues an error response.
    pub fn with_error(self, error: ChatError) -> Self {
        self.responses
            .lock()
            .expect("mock responses lock")
            .push_back(MockResponse::Error(error));
        self
    }

    /// Returns the number of completed calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock calls lock").len()
    }

    /// Returns a copy of the recorded requests.
    pub fn recorded_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().expect("mock calls lock").clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ChatError> {
        self.calls
            .lock()
            .expect("mock calls lock")
            .push(request.clone());

        let next = self
            .responses
            .lock()
            .expect("mock responses lock")
            .pop_front();

        match next {
            Some(MockResponse::Success(content)) => Ok(CompletionResponse {
                content,
                model: "mock-model".to_string(),
            }),
            Some(MockResponse::Error(error)) => Err(error),
            None => Err(ChatError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MessageRole;

    #[tokio::test]
    async fn returns_scripted_responses_in_order() {
        let provider = MockChatProvider::new()
            .with_response("first")
            .with_response("second");

        let r1 = provider.complete(CompletionRequest::new()).await.unwrap();
        let r2 = provider.complete(CompletionRequest::new()).await.unwrap();

        assert_eq!(r1.content, "first");
        assert_eq!(r2.content, "second");
    }

    #[tokio::test]
    async fn errors_are_injected() {
        let provider = MockChatProvider::new().with_error(ChatError::AuthenticationFailed);
        let err = provider.complete(CompletionRequest::new()).await.unwrap_err();
        assert!(matches!(err, ChatError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn exhausted_queue_yields_empty_response() {
        let provider = MockChatProvider::new();
        let err = provider.complete(CompletionRequest::new()).await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyResponse));
    }

    #[tokio::test]
    async fn records_requests_for_inspection() {
        let provider = MockChatProvider::new().with_response("ok");
        let request = CompletionRequest::new().with_message(MessageRole::User, "question");
        provider.complete(request).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.recorded_calls()[0].messages[0].content, "question");
    }
}
