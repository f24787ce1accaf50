//! Data directory location detection and management

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application directory name under the platform data directory
const APP_DIR: &str = "tasklist";

/// Fallback directory name under the home directory
const HOME_FALLBACK_DIR: &str = ".tasklist";

const CONFIG_FILE: &str = "config.yaml";
const STORAGE_FILE: &str = "storage.json";

/// Errors related to the data location
#[derive(Debug, Error)]
pub enum DataLocationError {
    #[error("Failed to access home directory")]
    NoHomeDirectory,
}

/// Where tasklist keeps its config and key-value file
#[derive(Debug, Clone)]
pub struct DataLocation {
    /// The directory holding config.yaml and storage.json
    pub dir: PathBuf,
}

impl DataLocation {
    /// Use a specific directory
    pub fn at(dir: impl AsRef<Path>) -> Self {
        DataLocation {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Platform data directory (e.g. ~/.local/share/tasklist), falling back
    /// to ~/.tasklist
    pub fn default_location() -> Result<Self, DataLocationError> {
        if let Some(data) = dirs::data_dir() {
            return Ok(Self::at(data.join(APP_DIR)));
        }

        let home = dirs::home_dir().ok_or(DataLocationError::NoHomeDirectory)?;
        Ok(Self::at(home.join(HOME_FALLBACK_DIR)))
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.dir.join(STORAGE_FILE)
    }
}
