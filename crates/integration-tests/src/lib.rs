//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart survival across reopen through the file store
//! - `checkout_flow` - Cart to order summary to purchase history
//!
//! Shared fixtures live here so every test file builds products the same way.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use shopfront_core::{Product, ProductId};

/// A catalog product priced in cents.
#[must_use]
pub fn product(id: &str, name: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Decimal::new(cents, 2),
        image: format!("https://picsum.photos/seed/{id}/400/500"),
        image_hint: None,
    }
}

/// The tee, jeans, hoodie, and sneakers from the demo catalog.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    vec![
        product("1", "Classic Black Tee", 2999),
        product("2", "Urban Denim Jeans", 8999),
        product("3", "Cozy Gray Hoodie", 5999),
        product("4", "Minimalist Sneakers", 7999),
    ]
}
