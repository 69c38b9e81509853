//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Gemini provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key (from `GEMINI_API_KEY`)
    pub gemini_api_key: Option<Secret<String>>,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API root URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; unset means no client-side limit
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check if an API key is present and non-blank
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Builds the provider configuration, or `None` without an API key.
    pub fn gemini_config(&self) -> Option<GeminiConfig> {
        if !self.has_api_key() {
            return None;
        }
        let key = self.gemini_api_key.as_ref()?.expose_secret().trim().to_string();
        let mut config = GeminiConfig::new(key)
            .with_model(&self.model)
            .with_base_url(&self.base_url);
        if let Some(timeout) = self.timeout() {
            config = config.with_timeout(timeout);
        }
        Some(config)
    }

    /// Validate AI configuration
    ///
    /// A missing key is not an error here: the shell starts anyway and
    /// reports the key as unconfigured.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
