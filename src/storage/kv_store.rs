//! Key-value storage backends for the persistence shim

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors related to key-value storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse storage file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize storage: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key-value store
pub trait KeyValueStore {
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// In-memory store, used when persistence is disabled and in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }
}

/// A stored value and when it was last written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: String,
    pub updated: DateTime<Utc>,
}

/// JSON file store: one object mapping keys to [`StoredValue`]
#[derive(Debug, Clone)]
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileKvStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, StoredValue>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileKvStore {
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                updated: Utc::now(),
            },
        );

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key).map(|stored| stored.value))
    }
}
