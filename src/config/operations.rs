//! Config loading, validation, and path helpers.

use super::model::Config;
use crate::error::{PalaverError, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PalaverError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PalaverError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PalaverError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `command_prefix` must be non-empty and contain no whitespace
    /// - `history_resource` must not be blank
    /// - snapshot file names must be non-empty and distinct
    pub fn validate(&self) -> Result<()> {
        if self.command_prefix.is_empty() {
            return Err(PalaverError::ConfigError(
                "config validation failed: command_prefix must not be empty".to_string(),
            ));
        }
        if self.command_prefix.chars().any(char::is_whitespace) {
            return Err(PalaverError::ConfigError(format!(
                "config validation failed: command_prefix must not contain whitespace (found {:?})",
                self.command_prefix
            )));
        }

        if self.history_resource.trim().is_empty() {
            return Err(PalaverError::ConfigError(
                "config validation failed: history_resource must not be blank".to_string(),
            ));
        }

        for (field, value) in [
            ("history_file", &self.history_file),
            ("conversation_file", &self.conversation_file),
        ] {
            if value.trim().is_empty() {
                return Err(PalaverError::ConfigError(format!(
                    "config validation failed: {} must not be empty",
                    field
                )));
            }
        }
        if self.history_file == self.conversation_file {
            return Err(PalaverError::ConfigError(format!(
                "config validation failed: history_file and conversation_file must differ (both '{}')",
                self.history_file
            )));
        }

        Ok(())
    }

    /// Full path of the history snapshot.
    pub fn history_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.history_file)
    }

    /// Full path of the conversation snapshot.
    pub fn conversation_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.conversation_file)
    }

    pub fn export_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.export_dir).join(file_name)
    }
}
