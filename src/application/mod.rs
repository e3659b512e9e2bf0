//! Application layer - coordinates the letter domain with its ports.

mod orchestrator;

pub use orchestrator::{GenerationOrchestrator, Superseded};
