//! PDF export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where exported documents are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Output directory, created on first export
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputDir);
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_current_directory() {
        assert_eq!(ExportConfig::default().output_dir, PathBuf::from("."));
        assert!(ExportConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_dir_is_invalid() {
        let config = ExportConfig {
            output_dir: PathBuf::new(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyOutputDir));
    }
}
