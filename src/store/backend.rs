//! Storage backends: the "how" of persistence.
//!
//! DESIGN
//! ======
//! A backend carries the single string slot the booking collection
//! serializes into. The browser backend degrades to a missing read and a
//! dropped write when localStorage is unavailable, which keeps every caller
//! on the fail-open path. [`InMemory`] backs tests and headless runs.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::collections::HashMap;
use std::sync::Mutex;

/// How one serialized value is read and written by key.
///
/// The trait covers the "how" of storage (browser localStorage vs process
/// memory); [`super::repository::BookingStore`] owns the "what".
pub trait StorageBackend: Send + Sync {
    /// The value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any prior value.
    fn write(&self, key: &str, value: &str);
}

/// Browser localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
}

/// Process-local backend for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct InMemory {
    cells: Mutex<HashMap<String, String>>,
}

impl StorageBackend for InMemory {
    fn read(&self, key: &str) -> Option<String> {
        let cells = self.cells.lock().ok()?;
        cells.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        let Ok(mut cells) = self.cells.lock() else {
            return;
        };
        cells.insert(key.to_owned(), value.to_owned());
    }
}
