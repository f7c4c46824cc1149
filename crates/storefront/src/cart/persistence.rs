//! Cart persistence adapter.
//!
//! Mirrors the in-memory cart into one slot of a [`KeyValueStore`]. The slot
//! holds a JSON array of line items:
//!
//! ```json
//! [{ "id": "tee-M", "name": "Classic Black Tee", "price": 29.99,
//!    "quantity": 2, "size": "M", "image": "tee.jpg", "imageHint": "shirt" }]
//! ```
//!
//! Older clients wrapped the array as `{ "items": [...] }`; that shape is
//! still accepted on read. Writes always use the bare array.

use serde::Deserialize;

use super::error::PersistenceError;
use super::types::{CartLineItem, CartState};
use crate::store::{KeyValueStore, keys};

/// Accepted shapes of a stored cart.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCart {
    Lines(Vec<CartLineItem>),
    Envelope { items: Vec<CartLineItem> },
}

/// Encode a cart for storage.
///
/// # Errors
///
/// Returns `PersistenceError::Serialize` if encoding fails.
pub fn encode(state: &CartState) -> Result<Vec<u8>, PersistenceError> {
    serde_json::to_vec(state).map_err(PersistenceError::Serialize)
}

/// Decode a stored cart.
///
/// # Errors
///
/// Returns `PersistenceError::Deserialize` for malformed bytes and
/// `PersistenceError::DuplicateLine` if two lines share a key.
pub fn decode(bytes: &[u8]) -> Result<CartState, PersistenceError> {
    let stored: StoredCart = serde_json::from_slice(bytes).map_err(PersistenceError::Deserialize)?;
    let items = match stored {
        StoredCart::Lines(items) | StoredCart::Envelope { items } => items,
    };
    CartState::from_items(items)
}

/// Reads and writes the cart slot of a store.
#[derive(Debug, Clone)]
pub struct CartStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartStorage<S> {
    /// Use the default `cart` slot.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, keys::CART)
    }

    /// Use a custom slot name.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Name of the slot holding the cart.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored cart, if any.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the slot cannot be read or decoded.
    pub fn try_load(&self) -> Result<Option<CartState>, PersistenceError> {
        self.store
            .get(&self.key)?
            .map(|bytes| decode(&bytes))
            .transpose()
    }

    /// Read the stored cart, falling back to an empty one.
    ///
    /// Missing or unreadable data is not an error from the caller's point of
    /// view; it is only logged.
    #[must_use]
    pub fn load(&self) -> CartState {
        match self.try_load() {
            Ok(Some(state)) => {
                tracing::debug!(
                    key = %self.key,
                    lines = state.len(),
                    "Restored cart from storage"
                );
                state
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored cart, starting empty");
                CartState::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to load cart, starting empty");
                CartState::new()
            }
        }
    }

    /// Write the cart to the slot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if encoding or the write fails.
    pub fn try_save(&self, state: &CartState) -> Result<(), PersistenceError> {
        let bytes = encode(state)?;
        self.store.set(&self.key, &bytes)?;
        Ok(())
    }

    /// Write the cart to the slot, logging and swallowing failures.
    ///
    /// Returns `true` if the write succeeded.
    pub fn save(&self, state: &CartState) -> bool {
        match self.try_save(state) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to save cart");
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;
    use shopfront_core::{Product, ProductId};

    use super::*;
    use crate::cart::reducer::{CartAction, reduce};
    use crate::cart::types::CartItemKey;
    use crate::store::{MemoryStore, StoreError};

    fn sample_cart() -> CartState {
        let tee = Product {
            id: ProductId::new("1"),
            name: "Classic Black Tee".to_owned(),
            price: Decimal::new(2999, 2),
            image: "tee.jpg".to_owned(),
            image_hint: Some("black t-shirt".to_owned()),
        };
        let hoodie = Product {
            id: ProductId::new("3"),
            name: "Cozy Gray Hoodie".to_owned(),
            price: Decimal::new(5999, 2),
            image: "hoodie.jpg".to_owned(),
            image_hint: None,
        };
        let state = reduce(
            CartState::new(),
            CartAction::AddItem {
                product: hoodie,
                size: None,
            },
        );
        let state = reduce(
            state,
            CartAction::AddItem {
                product: tee.clone(),
                size: Some("M".to_owned()),
            },
        );
        reduce(
            state,
            CartAction::AddItem {
                product: tee,
                size: Some("M".to_owned()),
            },
        )
    }

    /// A store whose writes always fail.
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> crate::store::Result<Option<Vec<u8>>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &[u8]) -> crate::store::Result<()> {
            Err(StoreError::Io(std::io::Error::other("quota exceeded")))
        }

        fn remove(&self, _key: &str) -> crate::store::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_round_trip_preserves_keys_quantities_and_order() {
        let cart = sample_cart();
        let decoded = decode(&encode(&cart).unwrap()).unwrap();
        assert_eq!(decoded, cart);
        assert_eq!(decoded.items()[0].id, CartItemKey::new("3"));
        assert_eq!(decoded.items()[1].id, CartItemKey::new("1-M"));
        assert_eq!(decoded.items()[1].quantity.get(), 2);
    }

    #[test]
    fn test_encodes_as_bare_array() {
        let json: serde_json::Value = serde_json::from_slice(&encode(&sample_cart()).unwrap()).unwrap();
        assert!(json.is_array());
    }

    #[test]
    fn test_decodes_wire_format() {
        let bytes = br#"[
            {"id":"1-M","name":"Classic Black Tee","price":29.99,"quantity":2,
             "size":"M","image":"tee.jpg","imageHint":"black t-shirt"},
            {"id":"3","name":"Cozy Gray Hoodie","price":59.99,"quantity":1,"image":"hoodie.jpg"}
        ]"#;
        let state = decode(bytes).unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.items()[0].price, Decimal::new(2999, 2));
        assert_eq!(state.items()[1].size, None);
        assert_eq!(state.subtotal(), Decimal::new(11997, 2));
    }

    #[test]
    fn test_decodes_legacy_envelope() {
        let bytes = br#"{"items":[{"id":"2-32","name":"Urban Denim Jeans","price":89.99,
            "quantity":1,"size":"32","image":"jeans.jpg"}]}"#;
        let state = decode(bytes).unwrap();
        assert_eq!(state.items()[0].id, CartItemKey::new("2-32"));
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let bytes = br#"[{"id":"1","name":"Tee","price":1,"quantity":0,"image":"x"}]"#;
        assert!(matches!(decode(bytes), Err(PersistenceError::Deserialize(_))));
    }

    #[test]
    fn test_rejects_duplicate_lines() {
        let bytes = br#"[{"id":"1","name":"Tee","price":1,"quantity":1,"image":"x"},
                         {"id":"1","name":"Tee","price":1,"quantity":2,"image":"x"}]"#;
        assert!(matches!(decode(bytes), Err(PersistenceError::DuplicateLine(_))));
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let storage = CartStorage::new(MemoryStore::new());
        assert!(storage.load().is_empty());
        assert!(storage.try_load().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_slot_is_empty() {
        let store = MemoryStore::new();
        store.set(keys::CART, b"{not json").unwrap();
        let storage = CartStorage::new(&store);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let storage = CartStorage::with_key(MemoryStore::new(), "session-42");
        assert!(storage.save(&sample_cart()));
        assert_eq!(storage.load(), sample_cart());
        assert!(storage.store().get("session-42").unwrap().is_some());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let storage = CartStorage::new(FullStore);
        assert!(!storage.save(&sample_cart()));
        assert!(matches!(
            storage.try_save(&sample_cart()),
            Err(PersistenceError::Store(StoreError::Io(_)))
        ));
    }
}
