//! Pure cart state transitions.
//!
//! [`reduce`] is the only place cart contents change. It performs no I/O and
//! never fails: removing or updating a key that is not in the cart leaves the
//! state untouched.

use std::num::NonZeroU32;

use shopfront_core::Product;

use super::types::{CartItemKey, CartLineItem, CartState};

/// Every way the cart can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of `product` in `size`, merging with an existing line.
    AddItem {
        product: Product,
        size: Option<String>,
    },
    /// Drop the line with this key.
    RemoveItem(CartItemKey),
    /// Set a line's quantity exactly. Zero or negative removes the line.
    UpdateQuantity { key: CartItemKey, quantity: i64 },
    /// Empty the cart.
    ClearCart,
    /// Replace the whole state. Used when loading a persisted cart.
    Restore(CartState),
}

/// Apply `action` to `state` and return the new state.
#[must_use]
pub fn reduce(mut state: CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem { product, size } => {
            let key = CartItemKey::for_product(&product.id, size.as_deref());
            if let Some(line) = state.get_mut(&key) {
                line.quantity = line.quantity.saturating_add(1);
            } else {
                state.push(CartLineItem::from_product(product, size));
            }
            state
        }
        CartAction::RemoveItem(key) => {
            state.remove(&key);
            state
        }
        CartAction::UpdateQuantity { key, quantity } => {
            match positive_quantity(quantity) {
                Some(quantity) => {
                    if let Some(line) = state.get_mut(&key) {
                        line.quantity = quantity;
                    }
                }
                None => state.remove(&key),
            }
            state
        }
        CartAction::ClearCart => CartState::new(),
        CartAction::Restore(restored) => restored,
    }
}

/// Requested quantities above `u32::MAX` saturate.
fn positive_quantity(quantity: i64) -> Option<NonZeroU32> {
    if quantity <= 0 {
        return None;
    }
    NonZeroU32::new(u32::try_from(quantity).unwrap_or(u32::MAX))
}
