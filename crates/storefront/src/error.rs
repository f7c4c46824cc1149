//! Crate-level error type.
//!
//! Cart operations themselves never fail; these errors come from setting the
//! crate up (configuration) or from direct store access.

use thiserror::Error;

use crate::cart::PersistenceError;
use crate::config::ConfigError;
use crate::store::StoreError;

/// Errors surfaced by the storefront library.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A storage backend failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// The stored cart could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type alias for `Error`.
pub type Result<T> = std::result::Result<T, Error>;
