//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Gemini and OpenAI providers, plus a scripted mock
//! - `clipboard` - in-memory clipboard sink
//! - `http` - axum REST surface over the generation orchestrator

pub mod ai;
pub mod clipboard;
pub mod http;
