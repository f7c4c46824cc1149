//! Shopfront Storefront library.
//!
//! The shopping cart for a single shopper session: a pure reducer, the
//! [`CartService`] facade wrapped around it, and persistence into a
//! key-value store so the cart survives restarts.
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shopfront_core::{Product, ProductId};
//! use shopfront_storefront::{CartService, store::MemoryStore};
//!
//! let mut cart = CartService::new(MemoryStore::new());
//! let tee = Product {
//!     id: ProductId::new("1"),
//!     name: "Classic Black Tee".to_owned(),
//!     price: Decimal::new(2999, 2),
//!     image: "/img/tee.jpg".to_owned(),
//!     image_hint: None,
//! };
//! cart.add_item(tee.clone(), Some("M".to_owned()));
//! cart.add_item(tee, Some("M".to_owned()));
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().display(), "$59.98");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod history;
pub mod store;

pub use cart::{CartAction, CartItemKey, CartLineItem, CartService, CartState};
pub use checkout::{OrderItem, OrderSummary};
pub use config::CartConfig;
pub use error::{Error, Result};
pub use history::PurchaseHistory;
