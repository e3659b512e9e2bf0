//! Generation module - lifecycle types for the render-then-enhance request.
//!
//! Pure domain: the state slot, its phase machine, failure classification
//! and the enhancement prompt. The orchestration that drives them lives in
//! `application`.

mod failure;
mod prompt;
mod state;

pub use failure::{FailureReason, USER_FACING_FAILURE_MESSAGE};
pub use prompt::{enhancement_prompt, LETTER_FENCE};
pub use state::{GenerationPhase, GenerationState};
