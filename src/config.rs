//! YAML configuration

use crate::storage::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors related to loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse YAML in {}: {source}", .path.display())]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings shared by the shell and the event protocol.
///
/// Every field has a default, so a missing file or a partial file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the most recently added task is written under
    pub storage_key: String,
    /// Write each added task to the key-value file
    pub persist_last_task: bool,
    /// Message shown while the list is empty
    pub placeholder: String,
    /// Heading shown above the list
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_last_task: true,
            placeholder: "No tasks added yet.".to_string(),
            title: "Task Manager".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse_from(&content, path)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_from(content, Path::new("<inline>"))
    }

    fn parse_from(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config =
            serde_yaml::from_str(content).map_err(|source| ConfigError::YamlParse {
                path: origin.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.persist_last_task && self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "storage_key must not be empty when persist_last_task is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
