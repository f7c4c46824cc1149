//! Scoped key-value storage.
//!
//! The cart and purchase history each live in one named slot of a
//! [`KeyValueStore`]. Implementations:
//!
//! - [`MemoryStore`] - process-local map, used by tests and throwaway sessions
//! - [`FileStore`] - one JSON file per key inside a directory

use std::sync::Arc;

use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Default slot names.
pub mod keys {
    /// Slot holding the serialized cart.
    pub const CART: &str = "cart";

    /// Slot holding the list of previously purchased product IDs.
    pub const PURCHASE_HISTORY: &str = "purchaseHistory";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot represent.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Another user of the store panicked while holding its lock.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A synchronous byte store addressed by string keys.
pub trait KeyValueStore {
    /// Read the bytes stored under `key`, or `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the write.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Empty the slot. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
