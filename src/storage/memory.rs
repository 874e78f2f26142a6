//! In-process storage, shared between clones of the same handle.

use super::Storage;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, as a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed a raw value, bypassing write failure injection.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    /// Current raw value, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panicking writer leaves a complete map behind; keep using it.
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn check_writable(&self, key: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::persistence(key, "storage quota exceeded"));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.check_writable(key)?;
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Holds the map lock for the whole cycle.
    fn update(
        &self,
        key: &str,
        apply: &mut dyn FnMut(Option<String>) -> Option<String>,
    ) -> AppResult<()> {
        let mut entries = self.lock();
        let current = entries.get(key).cloned();
        if let Some(next) = apply(current) {
            self.check_writable(key)?;
            entries.insert(key.to_string(), next);
        }
        Ok(())
    }
}
