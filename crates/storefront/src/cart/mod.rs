//! Shopping cart.
//!
//! # Components
//!
//! - [`reducer`] - pure `(state, action) -> state` transitions
//! - [`service`] - [`CartService`], the read/write surface handed to callers
//! - [`persistence`] - mirrors the cart into a key-value store slot
//! - [`types`] - line items, composite keys, and the ordered cart state

pub mod error;
pub mod persistence;
pub mod reducer;
pub mod service;
pub mod types;

pub use error::PersistenceError;
pub use persistence::CartStorage;
pub use reducer::{CartAction, reduce};
pub use service::CartService;
pub use types::{CartItemKey, CartLineItem, CartState};
