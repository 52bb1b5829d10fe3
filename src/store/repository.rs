//! Booking repository: whole-collection load and save.
//!
//! SYSTEM CONTEXT
//! ==============
//! The collection is one JSON array under one fixed key. Every mutation in
//! the app is read-entire, transform, write-entire; there is no partial
//! update. Two tabs racing that cycle end in last-writer-wins, a known
//! limitation of the local, single-user scope.

#[cfg(test)]
#[path = "repository_test.rs"]
mod repository_test;

use std::sync::Arc;

use super::backend::{InMemory, LocalStorage, StorageBackend};
use super::types::Booking;

/// The single localStorage key the collection persists under.
pub const STORAGE_KEY: &str = "glampBookings";

/// Repository over one injectable storage backend.
#[derive(Clone)]
pub struct BookingStore {
    backend: Arc<dyn StorageBackend>,
}

impl BookingStore {
    /// Store backed by browser localStorage.
    #[must_use]
    pub fn browser() -> Self {
        Self::with_backend(Arc::new(LocalStorage))
    }

    /// Store backed by process memory, for tests and headless use.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(InMemory::default()))
    }

    /// Store over any backend.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Load the full collection.
    ///
    /// Never fails: a missing key is an empty collection, and malformed
    /// stored data is discarded with a warning rather than surfaced.
    #[must_use]
    pub fn load(&self) -> Vec<Booking> {
        let Some(raw) = self.backend.read(STORAGE_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(bookings) => bookings,
            Err(err) => {
                log::warn!("ignoring malformed booking collection: {err}");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with `bookings`.
    pub fn save(&self, bookings: &[Booking]) {
        match serde_json::to_string(bookings) {
            Ok(raw) => self.backend.write(STORAGE_KEY, &raw),
            Err(err) => log::warn!("failed to serialize booking collection: {err}"),
        }
    }
}
