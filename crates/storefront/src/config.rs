//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CART_STORE_DIR` - Directory for the file-backed store (default: `.shopfront`)
//! - `CART_STORAGE_KEY` - Slot holding the cart (default: `cart`)
//! - `CART_HISTORY_KEY` - Slot holding purchase history (default: `purchaseHistory`)
//! - `CART_CURRENCY` - ISO 4217 code prices are shown in (default: `USD`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::path::PathBuf;

use shopfront_core::CurrencyCode;
use thiserror::Error;

use crate::store::keys;

const DEFAULT_STORE_DIR: &str = ".shopfront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory the file store writes slot files into
    pub store_dir: PathBuf,
    /// Slot name for the serialized cart
    pub cart_key: String,
    /// Slot name for purchase history
    pub history_key: String,
    /// Currency totals are reported in
    pub currency: CurrencyCode,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production")
    pub sentry_environment: Option<String>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            cart_key: keys::CART.to_owned(),
            history_key: keys::PURCHASE_HISTORY.to_owned(),
            currency: CurrencyCode::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for an unknown currency or an
    /// empty slot name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let store_dir = lookup("CART_STORE_DIR")
            .filter(|dir| !dir.is_empty())
            .map_or(defaults.store_dir, PathBuf::from);
        let cart_key = get_slot_key(&lookup, "CART_STORAGE_KEY", defaults.cart_key)?;
        let history_key = get_slot_key(&lookup, "CART_HISTORY_KEY", defaults.history_key)?;
        let currency = match lookup("CART_CURRENCY") {
            Some(code) => code
                .parse::<CurrencyCode>()
                .map_err(|e| ConfigError::InvalidEnvVar("CART_CURRENCY".to_string(), e.to_string()))?,
            None => defaults.currency,
        };

        Ok(Self {
            store_dir,
            cart_key,
            history_key,
            currency,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a slot name, rejecting empty values.
fn get_slot_key(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: String,
) -> Result<String, ConfigError> {
    match lookup(var) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            var.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(value),
        None => Ok(default),
    }
}
