//! Catalog product as seen by the cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Image shown when a catalog entry carries no images.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// The catalog fields the cart copies when an item is added.
///
/// The catalog owns this data; the cart never validates or refreshes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the store currency.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Primary image reference.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
}

impl Product {
    /// Build a product from a catalog entry with a list of image URLs.
    ///
    /// The first URL becomes the primary image; an empty list falls back to
    /// [`PLACEHOLDER_IMAGE`].
    #[must_use]
    pub fn from_catalog_images(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        image_urls: &[String],
        image_hint: Option<String>,
    ) -> Self {
        let image = image_urls
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
        Self {
            id,
            name: name.into(),
            price,
            image,
            image_hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_image_is_first_url() {
        let urls = vec!["a.jpg".to_owned(), "b.jpg".to_owned()];
        let product = Product::from_catalog_images(
            ProductId::new("1"),
            "Classic Black Tee",
            Decimal::new(2999, 2),
            &urls,
            None,
        );
        assert_eq!(product.image, "a.jpg");
    }

    #[test]
    fn test_missing_images_fall_back_to_placeholder() {
        let product =
            Product::from_catalog_images(ProductId::new("1"), "Tee", Decimal::ONE, &[], None);
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
    }
}
