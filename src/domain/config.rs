//! Configuration value objects

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Default Gemini model when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
        }
    }

    /// Get the model, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Build a validated AI service configuration. None when no API key is
    /// set; the AI path is simply unavailable then.
    pub fn ai_config(&self) -> Option<AiServiceConfig> {
        let api_key = self.api_key.as_deref()?.trim();
        if api_key.is_empty() {
            return None;
        }
        Some(AiServiceConfig {
            api_key: api_key.to_string(),
            model: self.model_or_default().to_string(),
        })
    }
}

/// Validated configuration for the generative-AI endpoint. Constructed by
/// the composition root and injected into the client; never global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiServiceConfig {
    pub api_key: String,
    pub model: String,
}

impl AiServiceConfig {
    /// Create a configuration, validating both fields are non-empty
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        let model = model.into();

        if api_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                key: "api_key".to_string(),
                message: "API key must not be empty".to_string(),
            });
        }
        if model.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                key: "model".to_string(),
                message: "Model identifier must not be empty".to_string(),
            });
        }

        Ok(Self { api_key, model })
    }
}
