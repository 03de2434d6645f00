//! Key-value storage
//!
//! Whole-value persistence for the user directory and the cached session.
//! Every `set` replaces the previous value for that key entirely.

pub mod filesystem;
pub mod memory;
pub mod validation;

pub use filesystem::FileStore;
pub use memory::MemoryStore;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::StoreError;

/// A store of whole string values addressed by key.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing is.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Builds the store selected by the storage configuration.
pub fn open_store(config: &StorageConfig) -> Result<Box<dyn KeyValueStore>, StoreError> {
    match config.backend {
        StorageBackend::File => Ok(Box::new(FileStore::open(config.data_dir_path())?)),
        StorageBackend::Memory => Ok(Box::new(MemoryStore::default())),
    }
}
