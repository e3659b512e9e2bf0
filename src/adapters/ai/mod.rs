//! AI provider adapters.
//!
//! - `GeminiProvider` - Google Generative Language API (default)
//! - `OpenAIProvider` - OpenAI Chat Completions API
//! - `MockAIProvider` - scripted responses for tests

mod factory;
mod gemini_provider;
mod http_status;
mod mock_provider;
mod openai_provider;

pub use factory::provider_from_config;
pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, MockResponse, DEFAULT_MOCK_RESPONSE};
pub use openai_provider::{
    OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};
