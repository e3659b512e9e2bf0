//! Mock AI Provider for testing.
//!
//! Lets the generation workflow run without calling a real model.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Per-response latency for ordering and deadline tests
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_delayed_response("Dear Jane, ...", Duration::from_millis(100));
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(response.content, "Dear Jane, ...");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Content returned once the queue is exhausted.
pub const DEFAULT_MOCK_RESPONSE: &str = "Mock response";

/// Mock AI provider for testing.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// What the call resolves to.
    pub outcome: Result<String, AIError>,
    /// Latency before the call resolves.
    pub delay: Duration,
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse {
            outcome: Ok(content.into()),
            delay: Duration::ZERO,
        })
    }

    /// Adds a successful response that resolves after `delay`.
    pub fn with_delayed_response(self, content: impl Into<String>, delay: Duration) -> Self {
        self.push(MockResponse {
            outcome: Ok(content.into()),
            delay,
        })
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: AIError) -> Self {
        self.push(MockResponse {
            outcome: Err(error),
            delay: Duration::ZERO,
        })
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Requests received, oldest first.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(self, response: MockResponse) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
        self
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| MockResponse {
                outcome: Ok(DEFAULT_MOCK_RESPONSE.to_string()),
                delay: Duration::ZERO,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        // Dequeue before sleeping so concurrent callers keep submission order.
        let response = self.next_response();

        if !response.delay.is_zero() {
            sleep(response.delay).await;
        }

        let content = response.outcome?;
        Ok(CompletionResponse {
            usage: TokenUsage::new(10, (content.len() / 4) as u32),
            content,
            model: self.info.model.clone(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RequestSequence;
    use crate::ports::RequestMetadata;

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest::new(prompt, RequestMetadata::new(RequestSequence::FIRST))
    }

    #[tokio::test]
    async fn returns_configured_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(provider.complete(request("a")).await.unwrap().content, "first");
        assert_eq!(provider.complete(request("b")).await.unwrap().content, "second");
        assert_eq!(
            provider.complete(request("c")).await.unwrap().content,
            DEFAULT_MOCK_RESPONSE
        );
    }

    #[tokio::test]
    async fn injects_errors() {
        let provider = MockAIProvider::new().with_error(AIError::rate_limited(10));
        let err = provider.complete(request("a")).await.unwrap_err();
        assert_eq!(err, AIError::rate_limited(10));
    }

    #[tokio::test]
    async fn records_calls() {
        let provider = MockAIProvider::new();
        provider.complete(request("hello")).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.get_calls()[0].prompt, "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn applies_delay() {
        let provider = MockAIProvider::new()
            .with_delayed_response("slow", Duration::from_millis(100));

        let start = tokio::time::Instant::now();
        provider.complete(request("a")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn clones_share_queue_and_calls() {
        let provider = MockAIProvider::new().with_response("only");
        let clone = provider.clone();

        assert_eq!(clone.complete(request("a")).await.unwrap().content, "only");
        assert_eq!(
            provider.complete(request("b")).await.unwrap().content,
            DEFAULT_MOCK_RESPONSE
        );
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn reports_mock_info() {
        let info = MockAIProvider::new().provider_info();
        assert_eq!(info, ProviderInfo::new("mock", "mock-model-1"));
    }
}
