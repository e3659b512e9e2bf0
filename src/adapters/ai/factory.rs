//! Builds the configured provider.

use std::sync::Arc;

use super::{GeminiConfig, GeminiProvider, OpenAIConfig, OpenAIProvider};
use crate::config::{AiConfig, AiProviderKind};
use crate::ports::{AIError, AIProvider};

/// Creates the provider selected by `config.provider`.
///
/// Expects a validated config; a missing key surfaces as
/// `AIError::AuthenticationFailed`.
pub fn provider_from_config(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    let api_key = config.api_key().ok_or(AIError::AuthenticationFailed)?;

    let provider: Arc<dyn AIProvider> = match config.provider {
        AiProviderKind::Gemini => {
            let mut gemini = GeminiConfig::new(api_key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                gemini = gemini.with_model(model);
            }
            if let Some(url) = &config.base_url {
                gemini = gemini.with_base_url(url);
            }
            Arc::new(GeminiProvider::new(gemini)?)
        }
        AiProviderKind::OpenAI => {
            let mut openai = OpenAIConfig::new(api_key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                openai = openai.with_model(model);
            }
            if let Some(url) = &config.base_url {
                openai = openai.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
    };

    Ok(provider)
}
