//! Key/value persistence media for the clock record.
//!
//! Every backend stores opaque strings under string keys, the same way a
//! browser `localStorage` area does. The state store owns serialization.

pub mod json_file;
pub mod memory;
pub mod sqlite;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::config::Backend;
use crate::errors::AppResult;
use std::path::Path;

pub trait Storage {
    /// Return the value stored under `key`, `None` when absent.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Read-modify-write of a single key.
    ///
    /// `apply` receives the current value and returns the value to store, or
    /// `None` to leave the entry untouched. Backends that can isolate the
    /// whole cycle from other writers override this.
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> Option<String>,
    ) -> AppResult<()> {
        let current = self.read(key)?;
        if let Some(next) = apply(current) {
            self.write(key, &next)?;
        }
        Ok(())
    }
}

/// Open the configured backend at `path`, creating the medium if needed.
pub fn open(backend: Backend, path: &Path) -> AppResult<Box<dyn Storage>> {
    match backend {
        Backend::Json => Ok(Box::new(JsonFileStorage::open(path)?)),
        Backend::Sqlite => Ok(Box::new(SqliteStorage::open(path)?)),
    }
}
