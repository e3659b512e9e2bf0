//! Generation lifecycle state.

use serde::{Deserialize, Serialize};

use super::FailureReason;
use crate::domain::foundation::{RequestSequence, StateMachine};

/// The single result slot exposed to the presentation layer.
///
/// Each non-idle state is tagged with the submission that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// No request outstanding and nothing to display.
    #[default]
    Idle,
    /// A submission is rendering or waiting on the enhancement call.
    InFlight { sequence: RequestSequence },
    /// The enhanced letter is ready.
    Succeeded {
        sequence: RequestSequence,
        text: String,
    },
    /// The request failed; only the classification is kept.
    Failed {
        sequence: RequestSequence,
        reason: FailureReason,
    },
}

impl GenerationState {
    /// The lifecycle phase of this state.
    pub fn phase(&self) -> GenerationPhase {
        match self {
            GenerationState::Idle => GenerationPhase::Idle,
            GenerationState::InFlight { .. } => GenerationPhase::InFlight,
            GenerationState::Succeeded { .. } => GenerationPhase::Succeeded,
            GenerationState::Failed { .. } => GenerationPhase::Failed,
        }
    }

    /// The submission that produced this state, if any.
    pub fn sequence(&self) -> Option<RequestSequence> {
        match self {
            GenerationState::Idle => None,
            GenerationState::InFlight { sequence }
            | GenerationState::Succeeded { sequence, .. }
            | GenerationState::Failed { sequence, .. } => Some(*sequence),
        }
    }

    /// Letter text to display; empty unless succeeded.
    pub fn text(&self) -> &str {
        match self {
            GenerationState::Succeeded { text, .. } => text,
            _ => "",
        }
    }

    /// Failure classification, if failed.
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            GenerationState::Failed { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// User-facing error message, if failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.failure().map(FailureReason::user_message)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, GenerationState::InFlight { .. })
    }
}

/// Copyable projection of [`GenerationState`] used for transition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl StateMachine for GenerationPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GenerationPhase::*;
        matches!(
            (self, target),
            (Idle, Idle)
                | (Idle, InFlight)
                | (InFlight, InFlight)
                | (InFlight, Succeeded)
                | (InFlight, Failed)
                | (Succeeded, Idle)
                | (Succeeded, InFlight)
                | (Failed, Idle)
                | (Failed, InFlight)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GenerationPhase::*;
        match self {
            Idle => vec![Idle, InFlight],
            InFlight => vec![InFlight, Succeeded, Failed],
            Succeeded => vec![Idle, InFlight],
            Failed => vec![Idle, InFlight],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::letter::RenderError;

    const ALL: [GenerationPhase; 4] = [
        GenerationPhase::Idle,
        GenerationPhase::InFlight,
        GenerationPhase::Succeeded,
        GenerationPhase::Failed,
    ];

    #[test]
    fn default_state_is_idle() {
        let state = GenerationState::default();
        assert_eq!(state.phase(), GenerationPhase::Idle);
        assert_eq!(state.sequence(), None);
        assert_eq!(state.text(), "");
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn succeeded_exposes_text_only() {
        let state = GenerationState::Succeeded {
            sequence: RequestSequence::FIRST,
            text: "Dear Jane".to_string(),
        };
        assert_eq!(state.text(), "Dear Jane");
        assert_eq!(state.failure(), None);
        assert_eq!(state.sequence(), Some(RequestSequence::FIRST));
    }

    #[test]
    fn failed_exposes_user_message_without_detail() {
        let state = GenerationState::Failed {
            sequence: RequestSequence::new(3),
            reason: FailureReason::TemplateRenderFailed(RenderError::InvalidAmount(
                "abc".to_string(),
            )),
        };
        assert_eq!(state.text(), "");
        let message = state.error_message().unwrap();
        assert!(!message.contains("abc"));
    }

    #[test]
    fn every_phase_can_be_resubmitted() {
        for phase in ALL {
            assert!(phase.can_transition_to(&GenerationPhase::InFlight), "{phase:?}");
        }
    }

    #[test]
    fn terminal_results_can_be_cleared() {
        assert!(GenerationPhase::Succeeded.transition_to(GenerationPhase::Idle).is_ok());
        assert!(GenerationPhase::Failed.transition_to(GenerationPhase::Idle).is_ok());
        assert!(GenerationPhase::Idle.transition_to(GenerationPhase::Idle).is_ok());
    }

    #[test]
    fn in_flight_cannot_be_cleared() {
        assert!(GenerationPhase::InFlight.transition_to(GenerationPhase::Idle).is_err());
    }

    #[test]
    fn results_only_come_from_in_flight() {
        for phase in [GenerationPhase::Idle, GenerationPhase::Succeeded, GenerationPhase::Failed] {
            assert!(!phase.can_transition_to(&GenerationPhase::Succeeded));
            assert!(!phase.can_transition_to(&GenerationPhase::Failed));
        }
    }

    #[test]
    fn no_phase_is_terminal() {
        for phase in ALL {
            assert!(!phase.is_terminal());
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{from:?} -> {to:?}"
                );
            }
        }
    }
}
