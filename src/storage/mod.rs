//! Optional best-effort persistence

pub mod kv_store;
pub mod location;
pub mod shim;

pub use kv_store::{FileKvStore, KeyValueStore, MemoryKvStore, StorageError, StoredValue};
pub use location::{DataLocation, DataLocationError};
pub use shim::{DEFAULT_STORAGE_KEY, PersistenceShim};
