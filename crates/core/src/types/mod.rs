//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod status;

pub use id::*;
pub use price::{CurrencyCode, CurrencyCodeError, Price, line_amount, saturating_sum};
pub use product::{PLACEHOLDER_IMAGE, Product};
pub use status::*;
