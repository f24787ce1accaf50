//! Best-effort persistence of the most recently added task

use crate::store::{ChangeKind, TaskListChange, TaskListObserver};
use crate::storage::kv_store::KeyValueStore;

/// Default key the last added task is written under
pub const DEFAULT_STORAGE_KEY: &str = "text";

/// Store observer that writes the text of each newly added task under one
/// fixed key. Removals and toggles are ignored. Write failures are logged
/// and never reach the store.
#[derive(Debug)]
pub struct PersistenceShim<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceShim<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        PersistenceShim {
            backend,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStore> TaskListObserver for PersistenceShim<S> {
    fn on_change(&mut self, change: &TaskListChange<'_>) {
        let ChangeKind::Added { index } = change.kind else {
            return;
        };

        let Some(task) = change.tasks.get(*index) else {
            return;
        };

        if let Err(e) = self.backend.set(&self.key, &task.text) {
            log::warn!("Failed to persist task under '{}': {}", self.key, e);
        }
    }
}
