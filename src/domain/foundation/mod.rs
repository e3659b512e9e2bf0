//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types, and the state machine trait
//! used by the letter and generation modules.

mod errors;
mod ids;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{RequestSequence, TraceId};
pub use state_machine::StateMachine;
