//! Cart persistence error types.

use thiserror::Error;

use super::types::CartItemKey;
use crate::store::StoreError;

/// Errors that can occur while reading or writing the stored cart.
///
/// These never escape [`CartService`](super::CartService): a failed load
/// yields an empty cart and a failed save is logged.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The storage backend failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// The cart could not be encoded.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The stored bytes are not a cart.
    #[error("failed to deserialize cart: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The stored cart has two lines with the same key.
    #[error("stored cart has duplicate line {0}")]
    DuplicateLine(CartItemKey),
}
