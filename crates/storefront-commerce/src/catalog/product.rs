//! Catalog products.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::{ItemId, ProductId};
use crate::money::Money;

/// A product as loaded from the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// URL slug, also the cart line key.
    pub item_id: ItemId,
    pub category: Category,
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before discount.
    pub full_price: Money,
    /// Release year, drives the "newest" ordering.
    pub year: u32,
    /// Image path relative to the site root.
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Create a product with `full_price` equal to `price` and no image.
    pub fn new(
        id: impl Into<ProductId>,
        item_id: impl Into<ItemId>,
        category: Category,
        name: impl Into<String>,
        price: Money,
        year: u32,
    ) -> Self {
        Self {
            id: id.into(),
            item_id: item_id.into(),
            category,
            name: name.into(),
            price,
            full_price: price,
            year,
            image: String::new(),
        }
    }

    /// Path of the product details page, e.g. `/phones/apple-iphone-11`.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.category, self.item_id)
    }

    /// Whether the product sells below its full price.
    pub fn is_discounted(&self) -> bool {
        self.full_price.amount_cents > self.price.amount_cents
    }
}
