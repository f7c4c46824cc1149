//! Purchase history.
//!
//! A most-recent-first list of product IDs the shopper has checked out,
//! kept in its own storage slot so recommendations can read it later.

use shopfront_core::ProductId;

use crate::store::{KeyValueStore, keys};

/// Reads and updates the purchase history slot.
#[derive(Debug, Clone)]
pub struct PurchaseHistory<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PurchaseHistory<S> {
    /// Use the default `purchaseHistory` slot.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, keys::PURCHASE_HISTORY)
    }

    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored product IDs, most recent first. Unreadable data counts as empty.
    #[must_use]
    pub fn load(&self) -> Vec<ProductId> {
        let bytes = match self.store.get(&self.key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read purchase history");
                return Vec::new();
            }
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "Discarding corrupt purchase history");
            Vec::new()
        })
    }

    /// Put `purchased` at the front of the history, dropping older duplicates.
    ///
    /// Returns the updated history. Write failures are logged; the returned
    /// list reflects the update either way.
    pub fn record(&self, purchased: impl IntoIterator<Item = ProductId>) -> Vec<ProductId> {
        let mut updated: Vec<ProductId> = Vec::new();
        for id in purchased.into_iter().chain(self.load()) {
            if !updated.contains(&id) {
                updated.push(id);
            }
        }

        match serde_json::to_vec(&updated) {
            Ok(bytes) => {
                if let Err(e) = self.store.set(&self.key, &bytes) {
                    tracing::warn!(key = %self.key, error = %e, "Failed to save purchase history");
                }
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to serialize purchase history");
            }
        }
        updated
    }

    /// Forget all recorded purchases.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the slot cannot be removed.
    pub fn clear(&self) -> crate::store::Result<()> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn ids(raw: &[&str]) -> Vec<ProductId> {
        raw.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn test_empty_by_default() {
        let history = PurchaseHistory::new(MemoryStore::new());
        assert!(history.load().is_empty());
    }

    #[test]
    fn test_record_prepends_and_dedups() {
        let history = PurchaseHistory::new(MemoryStore::new());
        history.record(ids(&["1", "2"]));
        let updated = history.record(ids(&["3", "1"]));

        assert_eq!(updated, ids(&["3", "1", "2"]));
        assert_eq!(history.load(), updated);
    }

    #[test]
    fn test_stored_as_json_array() {
        let store = MemoryStore::new();
        let history = PurchaseHistory::new(&store);
        history.record(ids(&["7"]));
        let raw = store.get(keys::PURCHASE_HISTORY).unwrap().unwrap();
        assert_eq!(raw, br#"["7"]"#);
    }

    #[test]
    fn test_corrupt_history_is_replaced() {
        let store = MemoryStore::new();
        store.set(keys::PURCHASE_HISTORY, b"oops").unwrap();
        let history = PurchaseHistory::new(&store);
        assert!(history.load().is_empty());
        assert_eq!(history.record(ids(&["5"])), ids(&["5"]));
    }

    #[test]
    fn test_clear() {
        let history = PurchaseHistory::new(MemoryStore::new());
        history.record(ids(&["1"]));
        history.clear().unwrap();
        assert!(history.load().is_empty());
    }
}
