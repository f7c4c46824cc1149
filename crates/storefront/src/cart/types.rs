//! Cart line items and the ordered collection that holds them.

use core::fmt;
use std::collections::HashSet;
use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopfront_core::{Product, ProductId, line_amount, saturating_sum};

use super::error::PersistenceError;

/// Composite identity of a line item: product ID plus optional size.
///
/// Rendered as `"<productId>-<size>"`, or the bare product ID when there is
/// no size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemKey(String);

impl CartItemKey {
    /// Build the key for a product and optional size. An empty size counts as
    /// no size.
    #[must_use]
    pub fn for_product(product_id: &ProductId, size: Option<&str>) -> Self {
        match size.filter(|s| !s.is_empty()) {
            Some(size) => Self(format!("{product_id}-{size}")),
            None => Self(product_id.as_str().to_owned()),
        }
    }

    /// Wrap an already-rendered key, e.g. one read back from a UI event.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for CartItemKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CartItemKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One product+size combination in the cart.
///
/// Name, price, and image are copied from the catalog when the line is first
/// added and never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub id: CartItemKey,
    pub name: String,
    /// Unit price frozen at add time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: NonZeroU32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
}

impl CartLineItem {
    /// A fresh line with quantity 1.
    #[must_use]
    pub fn from_product(product: Product, size: Option<String>) -> Self {
        let size = size.filter(|s| !s.is_empty());
        let id = CartItemKey::for_product(&product.id, size.as_deref());
        Self {
            id,
            name: product.name,
            price: product.price,
            quantity: NonZeroU32::MIN,
            size,
            image: product.image,
            image_hint: product.image_hint,
        }
    }

    /// `price * quantity`, unrounded. Saturates at `Decimal::MAX`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        line_amount(self.price, self.quantity.get())
    }

    /// The catalog product ID this line was created from.
    ///
    /// Strips the `-<size>` suffix from the composite key when a size is set.
    /// A stored line whose key does not end in `-<size>` keeps its whole key
    /// as the product ID.
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        let key = self.id.as_str();
        let base = self
            .size
            .as_deref()
            .and_then(|size| key.strip_suffix(size))
            .and_then(|rest| rest.strip_suffix('-'))
            .unwrap_or(key);
        ProductId::new(base)
    }
}

/// Ordered line items, first-added first.
///
/// Serializes as a bare JSON array. At most one line exists per
/// [`CartItemKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from stored lines, rejecting duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateLine` if two lines share a key.
    pub fn from_items(items: Vec<CartLineItem>) -> Result<Self, PersistenceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(PersistenceError::DuplicateLine(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<CartLineItem> {
        self.items
    }

    /// Look up a line by key.
    #[must_use]
    pub fn get(&self, key: &CartItemKey) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == key)
    }

    pub(crate) fn get_mut(&mut self, key: &CartItemKey) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| &item.id == key)
    }

    pub(crate) fn push(&mut self, item: CartLineItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, key: &CartItemKey) {
        self.items.retain(|item| &item.id != key);
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of `price * quantity` across all lines, unrounded. Saturates at
    /// `Decimal::MAX`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        saturating_sum(self.items.iter().map(CartLineItem::line_total))
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product {
            id: ProductId::new("tee"),
            name: "Classic Black Tee".to_owned(),
            price: Decimal::new(2999, 2),
            image: "tee.jpg".to_owned(),
            image_hint: Some("black shirt".to_owned()),
        }
    }

    #[test]
    fn test_key_with_size() {
        let key = CartItemKey::for_product(&ProductId::new("tee"), Some("M"));
        assert_eq!(key.as_str(), "tee-M");
    }

    #[test]
    fn test_key_without_size() {
        let id = ProductId::new("tee");
        assert_eq!(CartItemKey::for_product(&id, None).as_str(), "tee");
        assert_eq!(CartItemKey::for_product(&id, Some("")).as_str(), "tee");
    }

    #[test]
    fn test_product_id_strips_size_suffix() {
        let item = CartLineItem::from_product(
            Product {
                id: ProductId::new("slim-fit-jeans"),
                ..tee()
            },
            Some("32".to_owned()),
        );
        assert_eq!(item.id.as_str(), "slim-fit-jeans-32");
        assert_eq!(item.product_id().as_str(), "slim-fit-jeans");
    }

    #[test]
    fn test_product_id_without_size() {
        let item = CartLineItem::from_product(tee(), None);
        assert_eq!(item.product_id().as_str(), "tee");
    }

    #[test]
    fn test_line_total() {
        let mut item = CartLineItem::from_product(tee(), None);
        item.quantity = NonZeroU32::new(3).unwrap();
        assert_eq!(item.line_total(), Decimal::new(8997, 2));
    }

    #[test]
    fn test_product_id_when_key_and_size_disagree() {
        let mut item = CartLineItem::from_product(tee(), None);
        item.id = CartItemKey::new("tee-L");
        item.size = Some("M".to_owned());
        assert_eq!(item.product_id().as_str(), "tee-L");
    }

    #[test]
    fn test_line_total_saturates() {
        let mut item = CartLineItem::from_product(tee(), None);
        item.price = Decimal::MAX / Decimal::TWO;
        item.quantity = NonZeroU32::new(3).unwrap();
        assert_eq!(item.line_total(), Decimal::MAX);
    }

    #[test]
    fn test_subtotal_saturates() {
        let mut big = CartLineItem::from_product(tee(), None);
        big.price = Decimal::MAX;
        let small = CartLineItem::from_product(tee(), Some("S".to_owned()));
        let state = CartState::from_items(vec![big, small]).unwrap();
        assert_eq!(state.subtotal(), Decimal::MAX);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let line = CartLineItem::from_product(tee(), Some("M".to_owned()));
        let result = CartState::from_items(vec![line.clone(), line]);
        assert!(matches!(result, Err(PersistenceError::DuplicateLine(_))));
    }

    #[test]
    fn test_serialized_field_names() {
        let line = CartLineItem::from_product(tee(), Some("M".to_owned()));
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], "tee-M");
        assert_eq!(json["price"], 29.99);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["imageHint"], "black shirt");
    }

    #[test]
    fn test_absent_size_is_omitted() {
        let line = CartLineItem::from_product(tee(), None);
        let json = serde_json::to_value(&line).unwrap();
        assert!(json.get("size").is_none());
    }
}
