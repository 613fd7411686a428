//! Store configuration via `entity.toml`
//!
//! The only setting today is the key delimiter. A config can be parsed from a
//! TOML string or read from a file; missing fields fall back to defaults.

use entity_core::{Error, Result, DEFAULT_KEY_DELIMITER};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "entity.toml";

/// Path store configuration loaded from `entity.toml`.
///
/// # Example
///
/// ```toml
/// # Delimiter separating path segments (default ":")
/// key_delimiter = "."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Delimiter that separates the segments of a nested key.
    #[serde(default = "default_key_delimiter")]
    pub key_delimiter: String,
}

fn default_key_delimiter() -> String {
    DEFAULT_KEY_DELIMITER.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_delimiter: default_key_delimiter(),
        }
    }
}

impl StoreConfig {
    /// Check the configuration for values a store cannot work with.
    ///
    /// # Errors
    ///
    /// Returns an error if the key delimiter is empty.
    pub fn validate(&self) -> Result<()> {
        if self.key_delimiter.is_empty() {
            return Err(Error::InvalidConfig(
                "key_delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Entity path store configuration
#
# Delimiter separating the segments of a nested key (default ":")
#   key_delimiter = ":"  ->  "event:simulator"
#   key_delimiter = "."  ->  "event.simulator"
key_delimiter = ":"
"#
    }

    /// Parse and validate config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::InvalidConfig(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?;
        debug!(path = %path.display(), delimiter = %config.key_delimiter, "Loaded store config");
        Ok(config)
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
