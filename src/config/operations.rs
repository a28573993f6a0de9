//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::ValidationRules;
use crate::error::{PackError, Result};
use log::debug;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PackError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PackError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PackError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `trigger_prefix` must be non-empty and contain no whitespace
    /// - `min_trigger_length` must be positive
    /// - `output_file` must be non-empty
    /// - `prompt_globs` must contain at least one pattern
    pub fn validate(&self) -> Result<()> {
        if self.trigger_prefix.is_empty() {
            return Err(PackError::UserError(
                "config validation failed: trigger_prefix must be non-empty".to_string(),
            ));
        }
        if self.trigger_prefix.chars().any(char::is_whitespace) {
            return Err(PackError::UserError(format!(
                "config validation failed: trigger_prefix must not contain whitespace (found '{}')",
                self.trigger_prefix
            )));
        }

        if self.min_trigger_length == 0 {
            return Err(PackError::UserError(
                "config validation failed: min_trigger_length must be greater than 0".to_string(),
            ));
        }

        if self.output_file.trim().is_empty() {
            return Err(PackError::UserError(
                "config validation failed: output_file must be non-empty".to_string(),
            ));
        }

        if self.prompt_globs.iter().all(|g| g.trim().is_empty()) {
            return Err(PackError::UserError(
                "config validation failed: prompt_globs must contain at least one pattern"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Rules used to validate prompt records.
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            trigger_prefix: self.trigger_prefix.clone(),
            min_trigger_length: self.min_trigger_length,
            min_prompt_length: self.min_prompt_length,
            min_variable_name_length: self.min_variable_name_length,
        }
    }
}
