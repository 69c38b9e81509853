//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid Gemini base URL format")]
    InvalidBaseUrl,

    #[error("Model name must not be empty")]
    EmptyModel,

    #[error("Export output directory must not be empty")]
    EmptyOutputDir,

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
