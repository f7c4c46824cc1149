//! Order summaries built from the cart at checkout.
//!
//! Submitting the order is someone else's job; this module only turns cart
//! contents into the record a checkout flow hands off.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopfront_core::{CurrencyCode, OrderStatus, Price, ProductId, line_amount};

use crate::cart::{CartLineItem, CartState};

/// Size recorded for items bought without one.
pub const NO_SIZE: &str = "N/A";

/// One purchased line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Catalog product ID (without the size suffix).
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    pub size: String,
}

impl From<&CartLineItem> for OrderItem {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.product_id(),
            name: line.name.clone(),
            image_url: line.image.clone(),
            price: line.price,
            quantity: line.quantity.get(),
            size: line.size.clone().unwrap_or_else(|| NO_SIZE.to_owned()),
        }
    }
}

impl OrderItem {
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        line_amount(self.price, self.quantity)
    }
}

/// Snapshot of the cart at the moment the shopper checks out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub items: Vec<OrderItem>,
    pub total: Price,
    pub item_count: u64,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl OrderSummary {
    /// Summarize `cart`. Returns `None` for an empty cart.
    #[must_use]
    pub fn from_cart(cart: &CartState, currency: CurrencyCode, now: DateTime<Utc>) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        Some(Self {
            items: cart.items().iter().map(OrderItem::from).collect(),
            total: Price::new(cart.subtotal(), currency),
            item_count: cart.item_count(),
            status: OrderStatus::default(),
            order_date: now,
        })
    }

    /// Distinct product IDs in the order, first occurrence first.
    #[must_use]
    pub fn product_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if !ids.contains(&item.id) {
                ids.push(item.id.clone());
            }
        }
        ids
    }
}
