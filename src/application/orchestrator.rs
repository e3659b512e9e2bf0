//! Generation orchestrator: render locally, polish remotely, keep only the
//! latest submission's outcome.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::foundation::{RequestSequence, StateMachine, ValidationError};
use crate::domain::generation::{
    enhancement_prompt, FailureReason, GenerationPhase, GenerationState,
};
use crate::domain::letter::{render, TransactionDescription};
use crate::ports::{
    AIError, AIProvider, Clipboard, ClipboardError, CompletionRequest, RequestMetadata,
};

/// A submission finished after a newer one was issued; its outcome was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("submission {sequence} superseded by {latest}")]
pub struct Superseded {
    /// The submission whose outcome was discarded.
    pub sequence: RequestSequence,
    /// The most recent submission at the time.
    pub latest: RequestSequence,
}

/// Drives one letter request from form values to a displayed result.
///
/// Holds the single result slot. Concurrent submissions are allowed; only
/// the most recently issued one may write its outcome. Each submission runs
/// on its own task, so dropping the `submit` future (caller timeout, client
/// disconnect) does not strand the slot in `InFlight`.
pub struct GenerationOrchestrator {
    shared: Shared,
}

/// State and settings a submission task needs once detached from the caller.
#[derive(Clone)]
struct Shared {
    provider: Arc<dyn AIProvider>,
    state: Arc<RwLock<GenerationState>>,
    latest: Arc<AtomicU64>,
    deadline: Option<Duration>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl GenerationOrchestrator {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            shared: Shared {
                provider,
                state: Arc::new(RwLock::new(GenerationState::Idle)),
                latest: Arc::new(AtomicU64::new(0)),
                deadline: None,
                max_tokens: None,
                temperature: None,
            },
        }
    }

    /// Bounds each enhancement call; expiry yields `Failed(Timeout)`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.shared.deadline = Some(deadline);
        self
    }

    /// Sampling parameters forwarded to the provider.
    pub fn with_sampling(mut self, max_tokens: Option<u32>, temperature: Option<f32>) -> Self {
        self.shared.max_tokens = max_tokens;
        self.shared.temperature = temperature;
        self
    }

    /// Snapshot of the result slot.
    pub async fn state(&self) -> GenerationState {
        self.shared.state.read().await.clone()
    }

    /// Most recently issued sequence, if any submission has been made.
    pub fn latest_sequence(&self) -> Option<RequestSequence> {
        match self.shared.latest.load(Ordering::SeqCst) {
            0 => None,
            n => Some(RequestSequence::new(n)),
        }
    }

    /// Renders and enhances a letter for `description`.
    ///
    /// Returns the state written to the slot, or [`Superseded`] when a newer
    /// submission was issued while this one was outstanding. The outcome is
    /// applied even if this future is dropped before it resolves.
    pub async fn submit(
        &self,
        description: &TransactionDescription,
    ) -> Result<GenerationState, Superseded> {
        let shared = self.shared.clone();
        let description = description.clone();

        // No await between marking the slot and spawning the task.
        let sequence = self.shared.begin().await;
        tracing::info!(
            sequence = %sequence,
            kind = %description.kind,
            provider = %shared.provider.provider_info().name,
            "Letter generation submitted"
        );
        let task = tokio::spawn(async move {
            let outcome = shared.generate(sequence, &description).await;
            shared.finish(sequence, outcome).await
        });

        match task.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(sequence = %sequence, error = %err, "Letter generation task aborted");
                let failed = GenerationState::Failed {
                    sequence,
                    reason: FailureReason::RemoteCallFailed,
                };
                self.shared.finish(sequence, failed).await
            }
        }
    }

    /// Resets the slot to `Idle`. Rejected while a request is outstanding.
    pub async fn clear(&self) -> Result<GenerationState, ValidationError> {
        let mut slot = self.shared.state.write().await;
        slot.phase().transition_to(GenerationPhase::Idle)?;
        *slot = GenerationState::Idle;
        Ok(GenerationState::Idle)
    }

    /// Hands the succeeded letter text, unchanged, to `clipboard`.
    ///
    /// Returns `false` without writing anything unless the slot holds a
    /// succeeded letter.
    pub async fn copy_to_clipboard(
        &self,
        clipboard: &dyn Clipboard,
    ) -> Result<bool, ClipboardError> {
        let slot = self.shared.state.read().await;
        match &*slot {
            GenerationState::Succeeded { text, .. } => {
                clipboard.write_text(text)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl Shared {
    async fn begin(&self) -> RequestSequence {
        let mut slot = self.state.write().await;
        let sequence = RequestSequence::new(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        *slot = GenerationState::InFlight { sequence };
        sequence
    }

    async fn generate(
        &self,
        sequence: RequestSequence,
        description: &TransactionDescription,
    ) -> GenerationState {
        let letter = match render(description) {
            Ok(letter) => letter,
            Err(err) => {
                tracing::warn!(sequence = %sequence, error = %err, "Letter template could not be rendered");
                return GenerationState::Failed {
                    sequence,
                    reason: FailureReason::TemplateRenderFailed(err),
                };
            }
        };
        tracing::debug!(sequence = %sequence, chars = letter.as_str().len(), "Letter rendered");

        let mut request =
            CompletionRequest::new(enhancement_prompt(&letter), RequestMetadata::new(sequence));
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        let trace_id = request.metadata.trace_id;

        let result = match self.deadline {
            Some(deadline) => match tokio::time::timeout(deadline, self.provider.complete(request)).await {
                Ok(result) => result,
                Err(_) => Err(AIError::timeout(deadline)),
            },
            None => self.provider.complete(request).await,
        };

        match result {
            Ok(response) if !response.content.trim().is_empty() => {
                tracing::info!(
                    sequence = %sequence,
                    trace_id = %trace_id,
                    model = %response.model,
                    total_tokens = response.usage.total_tokens,
                    "Letter enhanced"
                );
                GenerationState::Succeeded {
                    sequence,
                    text: response.content,
                }
            }
            Ok(_) => {
                tracing::warn!(sequence = %sequence, trace_id = %trace_id, "Provider returned blank letter");
                GenerationState::Failed {
                    sequence,
                    reason: FailureReason::RemoteCallFailed,
                }
            }
            Err(err) => {
                let reason = match err {
                    AIError::Timeout { .. } => FailureReason::Timeout,
                    _ => FailureReason::RemoteCallFailed,
                };
                tracing::error!(
                    sequence = %sequence,
                    trace_id = %trace_id,
                    error = %err,
                    retryable = err.is_retryable(),
                    "Letter enhancement failed"
                );
                GenerationState::Failed { sequence, reason }
            }
        }
    }

    async fn finish(
        &self,
        sequence: RequestSequence,
        outcome: GenerationState,
    ) -> Result<GenerationState, Superseded> {
        let mut slot = self.state.write().await;
        let latest = RequestSequence::new(self.latest.load(Ordering::SeqCst));
        if latest != sequence {
            tracing::debug!(sequence = %sequence, latest = %latest, "Dropping superseded outcome");
            return Err(Superseded { sequence, latest });
        }
        *slot = outcome.clone();
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::clipboard::InMemoryClipboard;
    use crate::domain::generation::LETTER_FENCE;
    use crate::domain::letter::{RenderError, TransactionKind};

    fn orchestrator(provider: &MockAIProvider) -> GenerationOrchestrator {
        GenerationOrchestrator::new(Arc::new(provider.clone()))
    }

    fn sample() -> TransactionDescription {
        TransactionDescription::sample()
    }

    #[tokio::test]
    async fn starts_idle_with_no_sequence() {
        let orch = orchestrator(&MockAIProvider::new());
        assert_eq!(orch.state().await, GenerationState::Idle);
        assert_eq!(orch.latest_sequence(), None);
    }

    #[tokio::test]
    async fn successful_submission_forwards_text_unmodified() {
        let provider = MockAIProvider::new().with_response("  Polished letter\n");
        let orch = orchestrator(&provider);

        let state = orch.submit(&sample()).await.unwrap();

        assert_eq!(
            state,
            GenerationState::Succeeded {
                sequence: RequestSequence::FIRST,
                text: "  Polished letter\n".to_string(),
            }
        );
        assert_eq!(orch.state().await, state);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn prompt_embeds_rendered_letter() {
        let provider = MockAIProvider::new();
        let orch = orchestrator(&provider);
        orch.submit(&sample()).await.unwrap();

        let prompt = &provider.get_calls()[0].prompt;
        let letter = render(&sample()).unwrap();
        assert!(prompt.contains(&format!("{LETTER_FENCE}\n{}\n{LETTER_FENCE}", letter)));
    }

    #[tokio::test]
    async fn sampling_is_forwarded() {
        let provider = MockAIProvider::new();
        let orch = orchestrator(&provider).with_sampling(Some(1500), Some(0.4));
        orch.submit(&sample()).await.unwrap();

        let call = &provider.get_calls()[0];
        assert_eq!(call.max_tokens, Some(1500));
        assert_eq!(call.temperature, Some(0.4));
        assert_eq!(call.metadata.sequence, RequestSequence::FIRST);
    }

    #[tokio::test]
    async fn unknown_kind_fails_without_remote_call() {
        let provider = MockAIProvider::new();
        let orch = orchestrator(&provider);
        let mut description = sample();
        description.kind = "Partnership".to_string();

        let state = orch.submit(&description).await.unwrap();

        assert_eq!(
            state.failure(),
            Some(&FailureReason::TemplateRenderFailed(
                RenderError::UnknownTransactionType("Partnership".to_string())
            ))
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn invalid_amount_fails_without_remote_call() {
        let provider = MockAIProvider::new();
        let orch = orchestrator(&provider);
        let mut description = TransactionDescription::sample();
        description.kind = TransactionKind::RealEstate.as_str().to_string();
        description.price = "1.5M".to_string();

        let state = orch.submit(&description).await.unwrap();

        assert!(matches!(
            state.failure(),
            Some(FailureReason::TemplateRenderFailed(RenderError::InvalidAmount(_)))
        ));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_error_is_remote_call_failed() {
        let provider = MockAIProvider::new().with_error(AIError::AuthenticationFailed);
        let orch = orchestrator(&provider);

        let state = orch.submit(&sample()).await.unwrap();

        assert_eq!(state.failure(), Some(&FailureReason::RemoteCallFailed));
        assert_eq!(state.text(), "");
    }

    #[tokio::test]
    async fn blank_completion_is_remote_call_failed() {
        let provider = MockAIProvider::new().with_response(" \n\t");
        let orch = orchestrator(&provider);

        let state = orch.submit(&sample()).await.unwrap();
        assert_eq!(state.failure(), Some(&FailureReason::RemoteCallFailed));
    }

    #[tokio::test]
    async fn provider_timeout_is_timeout() {
        let provider = MockAIProvider::new().with_error(AIError::Timeout { timeout_secs: 60 });
        let orch = orchestrator(&provider);

        let state = orch.submit(&sample()).await.unwrap();
        assert_eq!(state.failure(), Some(&FailureReason::Timeout));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_expiry_is_timeout() {
        let provider =
            MockAIProvider::new().with_delayed_response("late", Duration::from_secs(30));
        let orch = orchestrator(&provider).with_deadline(Duration::from_secs(5));

        let state = orch.submit(&sample()).await.unwrap();
        assert_eq!(state.failure(), Some(&FailureReason::Timeout));
    }

    #[tokio::test(start_paused = true)]
    async fn later_submission_wins_over_slower_earlier_one() {
        let provider = MockAIProvider::new()
            .with_delayed_response("first", Duration::from_millis(200))
            .with_response("second");
        let orch = orchestrator(&provider);

        let (first_input, second_input) = (sample(), sample());
        let (first, second) = tokio::join!(orch.submit(&first_input), orch.submit(&second_input));

        assert_eq!(
            first,
            Err(Superseded {
                sequence: RequestSequence::FIRST,
                latest: RequestSequence::new(2),
            })
        );
        assert_eq!(second.unwrap().text(), "second");
        assert_eq!(orch.state().await.text(), "second");
    }

    #[tokio::test]
    async fn resubmission_increments_sequence() {
        let orch = orchestrator(&MockAIProvider::new());
        orch.submit(&sample()).await.unwrap();
        let state = orch.submit(&sample()).await.unwrap();

        assert_eq!(state.sequence(), Some(RequestSequence::new(2)));
        assert_eq!(orch.latest_sequence(), Some(RequestSequence::new(2)));
    }

    #[tokio::test]
    async fn clear_resets_result() {
        let orch = orchestrator(&MockAIProvider::new().with_response("done"));
        orch.submit(&sample()).await.unwrap();

        assert_eq!(orch.clear().await.unwrap(), GenerationState::Idle);
        assert_eq!(orch.state().await, GenerationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_is_rejected_while_in_flight() {
        let provider = MockAIProvider::new().with_delayed_response("slow", Duration::from_secs(1));
        let orch = Arc::new(orchestrator(&provider));

        let pending = {
            let orch = orch.clone();
            tokio::spawn(async move { orch.submit(&TransactionDescription::sample()).await })
        };
        tokio::task::yield_now().await;
        while !orch.state().await.is_in_flight() {
            tokio::task::yield_now().await;
        }

        assert!(orch.clear().await.is_err());
        assert!(orch.state().await.is_in_flight());

        pending.await.unwrap().unwrap();
        assert_eq!(orch.state().await.text(), "slow");
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_submission_still_settles_slot() {
        let provider =
            MockAIProvider::new().with_delayed_response("late", Duration::from_secs(30));
        let orch = orchestrator(&provider);

        let waited = tokio::time::timeout(Duration::from_secs(5), orch.submit(&sample())).await;
        assert!(waited.is_err());
        assert!(orch.state().await.is_in_flight());

        tokio::time::sleep(Duration::from_secs(60)).await;

        let state = orch.state().await;
        assert_eq!(state.text(), "late");
        assert_eq!(state.sequence(), Some(RequestSequence::FIRST));
        assert_eq!(orch.clear().await.unwrap(), GenerationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_submission_is_still_superseded_by_later_one() {
        let provider = MockAIProvider::new()
            .with_delayed_response("abandoned", Duration::from_secs(30))
            .with_response("current");
        let orch = orchestrator(&provider);

        let waited = tokio::time::timeout(Duration::from_secs(1), orch.submit(&sample())).await;
        assert!(waited.is_err());

        let state = orch.submit(&sample()).await.unwrap();
        assert_eq!(state.text(), "current");

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(orch.state().await.text(), "current");
    }

    #[tokio::test]
    async fn copy_passes_text_through() {
        let orch = orchestrator(&MockAIProvider::new().with_response("Dear Jane,\n\nRegards"));
        let clipboard = InMemoryClipboard::new();

        assert!(!orch.copy_to_clipboard(&clipboard).await.unwrap());
        assert_eq!(clipboard.contents(), None);

        orch.submit(&sample()).await.unwrap();
        assert!(orch.copy_to_clipboard(&clipboard).await.unwrap());
        assert_eq!(clipboard.contents().as_deref(), Some("Dear Jane,\n\nRegards"));
    }

    #[tokio::test]
    async fn copy_writes_nothing_after_failure() {
        let orch = orchestrator(&MockAIProvider::new().with_error(AIError::network("reset")));
        let clipboard = InMemoryClipboard::new();
        orch.submit(&sample()).await.unwrap();

        assert!(!orch.copy_to_clipboard(&clipboard).await.unwrap());
        assert_eq!(clipboard.contents(), None);
    }
}
