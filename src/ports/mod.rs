//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - text completion used to polish rendered letters
//! - `Clipboard` - sink for the copy-to-clipboard pass-through

mod ai_provider;
mod clipboard;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    RequestMetadata, TokenUsage,
};
pub use clipboard::{Clipboard, ClipboardError};
