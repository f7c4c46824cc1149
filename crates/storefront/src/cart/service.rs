//! Cart facade.
//!
//! [`CartService`] owns the cart for one shopper session. It is built once and
//! handed to whatever needs the cart; there is no global instance. Every
//! mutation goes through [`reduce`] and is then written to storage.

use chrono::{DateTime, Utc};
use shopfront_core::{CurrencyCode, Price, Product};

use super::persistence::CartStorage;
use super::reducer::{CartAction, reduce};
use super::types::{CartItemKey, CartLineItem, CartState};
use crate::checkout::OrderSummary;
use crate::config::CartConfig;
use crate::history::PurchaseHistory;
use crate::store::KeyValueStore;

/// Session-scoped shopping cart backed by a key-value store.
#[derive(Debug)]
pub struct CartService<S: KeyValueStore> {
    state: CartState,
    storage: CartStorage<S>,
    currency: CurrencyCode,
}

impl<S: KeyValueStore> CartService<S> {
    /// Open the cart in the default slot, priced in USD.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::open(CartStorage::new(store), CurrencyCode::default())
    }

    /// Open the cart using the slot name and currency from `config`.
    #[must_use]
    pub fn from_config(store: S, config: &CartConfig) -> Self {
        Self::open(
            CartStorage::with_key(store, config.cart_key.clone()),
            config.currency,
        )
    }

    /// Open the cart held in `storage`.
    ///
    /// A missing or unreadable stored cart yields an empty cart.
    #[must_use]
    pub fn open(storage: CartStorage<S>, currency: CurrencyCode) -> Self {
        let state = reduce(CartState::new(), CartAction::Restore(storage.load()));
        Self {
            state,
            storage,
            currency,
        }
    }

    fn dispatch(&mut self, action: CartAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.storage.save(&self.state);
    }

    /// Add one unit of `product`, merging with an existing line of the same
    /// product and size.
    pub fn add_item(&mut self, product: Product, size: Option<String>) {
        tracing::debug!(product_id = %product.id, size = ?size, "Adding item to cart");
        self.dispatch(CartAction::AddItem { product, size });
    }

    /// Remove a line. Unknown keys are ignored.
    pub fn remove_item(&mut self, key: &CartItemKey) {
        tracing::debug!(key = %key, "Removing item from cart");
        self.dispatch(CartAction::RemoveItem(key.clone()));
    }

    /// Set a line's quantity. Zero or negative removes the line; unknown keys
    /// are ignored.
    pub fn update_quantity(&mut self, key: &CartItemKey, quantity: i64) {
        tracing::debug!(key = %key, quantity, "Updating cart quantity");
        self.dispatch(CartAction::UpdateQuantity {
            key: key.clone(),
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        tracing::debug!("Clearing cart");
        self.dispatch(CartAction::ClearCart);
    }

    /// Sum of `price * quantity` over all lines. Unrounded; use
    /// [`Price::display`] to render.
    #[must_use]
    pub fn total(&self) -> Price {
        Price::new(self.state.subtotal(), self.currency)
    }

    /// Number of units in the cart (not distinct lines).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Lines in first-added order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    #[must_use]
    pub fn get(&self, key: &CartItemKey) -> Option<&CartLineItem> {
        self.state.get(key)
    }

    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub const fn storage(&self) -> &CartStorage<S> {
        &self.storage
    }

    /// Order summary for the current contents, or `None` if the cart is empty.
    #[must_use]
    pub fn checkout_summary(&self, now: DateTime<Utc>) -> Option<OrderSummary> {
        OrderSummary::from_cart(&self.state, self.currency, now)
    }

    /// Finish checkout: build the order summary, record the purchased
    /// products in `history`, and empty the cart.
    ///
    /// Returns `None` and changes nothing if the cart is empty.
    pub fn complete_checkout<H: KeyValueStore>(
        &mut self,
        history: &PurchaseHistory<H>,
        now: DateTime<Utc>,
    ) -> Option<OrderSummary> {
        let summary = self.checkout_summary(now)?;
        history.record(summary.product_ids());
        tracing::info!(
            lines = summary.items.len(),
            item_count = summary.item_count,
            total = %summary.total,
            "Checkout completed"
        );
        self.clear_cart();
        Some(summary)
    }
}
