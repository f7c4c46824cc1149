//! Subcommand implementations.
//!
//! Each command returns the text to print rather than printing it, so the
//! output can be tested.

use thiserror::Error;

pub mod cart;
pub mod history;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration, storage, or persistence failure.
    #[error(transparent)]
    Storefront(#[from] shopfront_storefront::Error),

    /// Output could not be encoded as JSON.
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
