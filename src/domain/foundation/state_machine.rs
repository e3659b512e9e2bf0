//! State machine trait for lifecycle enums.
//!
//! Gives lifecycle phases a single place to declare their legal transitions,
//! and a validated `transition_to` built on top of it.

use super::ValidationError;

/// Trait for `Copy` phase enums that form a state machine.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for GenerationPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Idle, InFlight],
///             // ...
///         }
///     }
/// }
///
/// let next = current.transition_to(GenerationPhase::InFlight)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(self, target))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
