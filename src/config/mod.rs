//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SUMMARIZER_` prefix and nested values use double underscores as separators.
//! The API key is also read from the conventional `GEMINI_API_KEY` variable.
//!
//! # Example
//!
//! ```no_run
//! use text_summarizer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Exports go to {}", config.export.output_dir.display());
//! ```

mod ai;
mod error;
mod export;
mod logging;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Conventional variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Root application configuration
///
/// Every section has defaults, so loading succeeds with an empty
/// environment. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// PDF export configuration
    #[serde(default)]
    pub export: ExportConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `SUMMARIZER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Takes `GEMINI_API_KEY` as the API key when set
    ///
    /// # Environment Variable Format
    ///
    /// - `SUMMARIZER__AI__MODEL=gemini-2.5-flash` -> `ai.model`
    /// - `SUMMARIZER__EXPORT__OUTPUT_DIR=./exports` -> `export.output_dir`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_VAR).ok().filter(|k| !k.trim().is_empty());

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SUMMARIZER")
                    .separator("__"),
            )
            .set_override_option("ai.gemini_api_key", api_key)?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        API_KEY_VAR,
        "SUMMARIZER__AI__MODEL",
        "SUMMARIZER__AI__TIMEOUT_SECS",
        "SUMMARIZER__EXPORT__OUTPUT_DIR",
        "SUMMARIZER__LOGGING__FORMAT",
        "SUMMARIZER__LOGGING__LEVEL",
    ];

    /// Helper to clear environment variables around a test
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ai.model, "gemini-2.5-pro");
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_key_from_conventional_variable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(API_KEY_VAR, "AIza-test");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.ai.has_api_key());
        assert!(config.ai.gemini_config().is_some());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(API_KEY_VAR, "  ");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().ai.gemini_config().is_none());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("SUMMARIZER__AI__MODEL", "gemini-2.5-flash");
        env::set_var("SUMMARIZER__AI__TIMEOUT_SECS", "45");
        env::set_var("SUMMARIZER__EXPORT__OUTPUT_DIR", "/tmp/exports");
        env::set_var("SUMMARIZER__LOGGING__FORMAT", "json");
        env::set_var("SUMMARIZER__LOGGING__LEVEL", "debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert_eq!(config.ai.timeout_secs, Some(45));
        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate_reports_bad_section() {
        let config = AppConfig {
            ai: AiConfig {
                timeout_secs: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }
}
