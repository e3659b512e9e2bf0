//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which provider polishes letters
    #[serde(default)]
    pub provider: AiProviderKind,

    /// Google Gemini API key
    pub gemini_api_key: Option<Secret<String>>,

    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// Model override; each provider has its own default
    pub model: Option<String>,

    /// API root override (proxies, local test servers)
    pub base_url: Option<String>,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Overall deadline for one enhancement call, in seconds
    pub deadline_secs: Option<u64>,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    pub temperature: Option<f32>,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderKind {
    #[default]
    Gemini,
    OpenAI,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Orchestrator deadline, if configured
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_secs.map(Duration::from_secs)
    }

    /// Check if Gemini is configured
    pub fn has_gemini(&self) -> bool {
        non_empty(&self.gemini_api_key)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        non_empty(&self.openai_api_key)
    }

    /// API key for the selected provider
    pub fn api_key(&self) -> Option<&str> {
        let key = match self.provider {
            AiProviderKind::Gemini => &self.gemini_api_key,
            AiProviderKind::OpenAI => &self.openai_api_key,
        };
        key.as_ref().map(|k| k.expose_secret().as_str())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.provider {
            AiProviderKind::Gemini if !self.has_gemini() => {
                return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
            }
            AiProviderKind::OpenAI if !self.has_openai() => {
                return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
            }
            _ => {}
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.deadline_secs == Some(0) {
            return Err(ValidationError::InvalidDeadline);
        }
        if self.max_tokens == Some(0) {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ValidationError::InvalidTemperature);
            }
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProviderKind::default(),
            gemini_api_key: None,
            openai_api_key: None,
            model: None,
            base_url: None,
            timeout_secs: default_timeout(),
            deadline_secs: None,
            max_tokens: None,
            temperature: None,
        }
    }
}

fn non_empty(key: &Option<Secret<String>>) -> bool {
    key.as_ref()
        .is_some_and(|k| !k.expose_secret().trim().is_empty())
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gemini_config() -> AiConfig {
        AiConfig {
            gemini_api_key: Some(Secret::new("AIza-test".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProviderKind::Gemini);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.deadline(), None);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 45,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_validation_requires_selected_provider_key() {
        assert_eq!(
            AiConfig::default().validate(),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        );

        let config = AiConfig {
            provider: AiProviderKind::OpenAI,
            ..gemini_config()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = AiConfig {
            gemini_api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(!config.has_gemini());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_follows_provider() {
        let config = AiConfig {
            openai_api_key: Some(Secret::new("sk-test".to_string())),
            ..gemini_config()
        };
        assert_eq!(config.api_key(), Some("AIza-test"));

        let config = AiConfig {
            provider: AiProviderKind::OpenAI,
            ..config
        };
        assert_eq!(config.api_key(), Some("sk-test"));
    }

    #[test]
    fn test_validation_ranges() {
        assert!(gemini_config().validate().is_ok());

        let config = AiConfig {
            timeout_secs: 301,
            ..gemini_config()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));

        let config = AiConfig {
            temperature: Some(2.5),
            ..gemini_config()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));

        let config = AiConfig {
            deadline_secs: Some(0),
            ..gemini_config()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDeadline));

        let config = AiConfig {
            max_tokens: Some(0),
            ..gemini_config()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxTokens));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let rendered = format!("{:?}", gemini_config());
        assert!(!rendered.contains("AIza-test"));
    }
}
