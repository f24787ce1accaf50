//! Rendering-layer glue between user intents and the task list
//!
//! A session owns the store and the pending-input field. Renderers (the
//! terminal shell and the event protocol) forward intents here and
//! re-render whatever the store broadcasts.

use crate::config::{Config, ConfigError};
use crate::storage::{DataLocation, DataLocationError, FileKvStore, KeyValueStore, PersistenceShim};
use crate::store::{Change, SubscriptionId, TaskListObserver, TaskListStore};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from opening a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Data location error: {0}")]
    Location(#[from] DataLocationError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Where a session finds its config and key-value file
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Explicit config file; defaults to `<data dir>/config.yaml`
    pub config: Option<PathBuf>,
    /// Explicit data directory; defaults to the platform data directory
    pub data_dir: Option<PathBuf>,
    /// Skip the persistence shim regardless of config
    pub no_persist: bool,
}

#[derive(Debug)]
pub struct Session {
    store: TaskListStore,
    input: String,
    config: Config,
}

impl Session {
    /// Start a session with an empty list
    pub fn new(config: Config) -> Self {
        Session {
            store: TaskListStore::new(),
            input: String::new(),
            config,
        }
    }

    /// Load config, then attach the file-backed shim unless disabled
    pub fn open(options: &SessionOptions) -> Result<Self, SessionError> {
        let location = match &options.data_dir {
            Some(dir) => DataLocation::at(dir),
            None => DataLocation::default_location()?,
        };

        let config_path = options
            .config
            .clone()
            .unwrap_or_else(|| location.config_path());
        let config = Config::load(&config_path)?;

        let mut session = Session::new(config);
        if options.no_persist {
            log::debug!("Persistence disabled by flag");
        } else if session
            .enable_persistence(FileKvStore::new(location.storage_path()))
            .is_some()
        {
            log::debug!(
                "Persisting last task to {}",
                location.storage_path().display()
            );
        }

        Ok(session)
    }

    /// Attach the best-effort persistence shim, if the config enables it
    pub fn enable_persistence<S>(&mut self, backend: S) -> Option<SubscriptionId>
    where
        S: KeyValueStore + 'static,
    {
        if !self.config.persist_last_task {
            log::debug!("Persistence disabled by config");
            return None;
        }

        let shim = PersistenceShim::new(backend, self.config.storage_key.clone());
        Some(self.store.subscribe(shim))
    }

    pub fn subscribe(&mut self, observer: impl TaskListObserver + 'static) -> SubscriptionId {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Replace the pending-input field
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the pending input. The field is cleared only when a task was
    /// actually added.
    pub fn submit(&mut self) -> Change {
        let change = self.store.add(&self.input);
        if change.is_applied() {
            self.input.clear();
        }
        change
    }

    /// Submit raw text directly. The pending-input field is left as is.
    pub fn submit_text(&mut self, text: &str) -> Change {
        self.store.add(text)
    }

    pub fn remove(&mut self, index: usize) -> Change {
        self.store.remove_at(index)
    }

    pub fn toggle(&mut self, index: usize) -> Change {
        self.store.toggle_completed(index)
    }

    /// Second interaction on a task (double-click in a pointer UI)
    pub fn dismiss(&mut self, index: usize) -> Change {
        self.remove(index)
    }

    /// Placeholder message while the list is empty
    pub fn placeholder(&self) -> Option<&str> {
        if self.store.is_empty() {
            Some(self.config.placeholder.as_str())
        } else {
            None
        }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &TaskListStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use crate::store::TaskListChange;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn test_submit_clears_input_on_add() {
        let mut session = session();
        session.set_input("  Buy milk ");

        assert_eq!(session.submit(), Change::Applied);
        assert_eq!(session.input(), "");
        assert_eq!(session.store().texts(), vec!["Buy milk"]);
    }

    #[test]
    fn test_submit_blank_keeps_input() {
        let mut session = session();
        session.set_input("   ");

        assert_eq!(session.submit(), Change::NoOp);
        assert_eq!(session.input(), "   ");
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_submit_text_leaves_pending_input() {
        let mut session = session();
        session.set_input("Walk dog");

        assert_eq!(session.submit_text("  "), Change::NoOp);
        assert_eq!(session.input(), "Walk dog");

        assert_eq!(session.submit_text("Buy milk"), Change::Applied);
        assert_eq!(session.input(), "Walk dog");
        assert_eq!(session.store().texts(), vec!["Buy milk"]);

        assert_eq!(session.submit(), Change::Applied);
        assert_eq!(session.input(), "");
        assert_eq!(session.store().texts(), vec!["Buy milk", "Walk dog"]);
    }

    #[test]
    fn test_placeholder() {
        let mut session = session();
        assert_eq!(session.placeholder(), Some("No tasks added yet."));

        session.submit_text("Walk dog");
        assert_eq!(session.placeholder(), None);

        session.dismiss(0);
        assert_eq!(session.placeholder(), Some("No tasks added yet."));
    }

    #[test]
    fn test_scenario_through_session() {
        let mut session = session();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |change: &TaskListChange<'_>| {
            let texts: Vec<String> = change.texts().into_iter().map(String::from).collect();
            sink.borrow_mut().push(texts);
        });

        session.submit_text("Buy milk");
        session.submit_text("  ");
        session.submit_text("Walk dog");
        session.remove(0);
        session.remove(3);

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["Buy milk".to_string()],
                vec!["Buy milk".to_string(), "Walk dog".to_string()],
                vec!["Walk dog".to_string()],
            ]
        );
    }

    #[test]
    fn test_toggle() {
        let mut session = session();
        session.submit_text("Buy milk");

        assert!(session.toggle(0).is_applied());
        assert!(session.store().get(0).unwrap().completed);
        assert_eq!(session.toggle(1), Change::NoOp);
    }

    #[test]
    fn test_persistence_respects_config() {
        let mut session = session();
        assert!(session.enable_persistence(MemoryKvStore::new()).is_some());

        let mut disabled = Session::new(Config {
            persist_last_task: false,
            ..Default::default()
        });
        assert!(disabled.enable_persistence(MemoryKvStore::new()).is_none());
    }

    #[test]
    fn test_open_writes_storage_file() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("nested").join("tasklist");
        let options = SessionOptions {
            data_dir: Some(data_dir.clone()),
            ..Default::default()
        };

        let mut session = Session::open(&options).unwrap();
        assert_eq!(session.config(), &Config::default());
        assert!(!data_dir.exists());
        session.submit_text("Buy milk");

        let stored = FileKvStore::new(data_dir.join("storage.json"));
        assert_eq!(stored.get("text").unwrap(), Some("Buy milk".to_string()));
    }

    #[test]
    fn test_open_no_persist() {
        let temp = TempDir::new().unwrap();
        let options = SessionOptions {
            data_dir: Some(temp.path().to_path_buf()),
            no_persist: true,
            ..Default::default()
        };

        let mut session = Session::open(&options).unwrap();
        session.submit_text("Buy milk");
        assert!(!temp.path().join("storage.json").exists());
    }

    #[test]
    fn test_open_reads_explicit_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("custom.yaml");
        std::fs::write(&config_path, "title: Chores\npersist_last_task: false\n").unwrap();

        let options = SessionOptions {
            config: Some(config_path),
            data_dir: Some(temp.path().to_path_buf()),
            no_persist: false,
        };

        let mut session = Session::open(&options).unwrap();
        assert_eq!(session.title(), "Chores");
        session.submit_text("Buy milk");
        assert!(!temp.path().join("storage.json").exists());
    }

    #[test]
    fn test_open_rejects_bad_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.yaml"), "title: [oops").unwrap();

        let options = SessionOptions {
            data_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            Session::open(&options),
            Err(SessionError::Config(_))
        ));
    }
}
