//! Saved products.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ItemId;

/// Products the shopper marked as favourite, in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Favourites {
    items: Vec<Product>,
}

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product if absent, remove it otherwise.
    /// Returns whether the product is a favourite afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(&product.item_id) {
            self.items.retain(|p| p.item_id != product.item_id);
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|p| &p.item_id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `"1 item"` / `"N items"`.
    pub fn count_label(&self) -> String {
        match self.items.len() {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::{Currency, Money};

    #[test]
    fn test_toggle() {
        let mut favourites = Favourites::new();
        let tablet = Product::new(
            "3",
            "ipad-mini",
            Category::Tablets,
            "iPad mini",
            Money::whole(399, Currency::USD),
            2019,
        );

        assert!(favourites.toggle(&tablet));
        assert!(favourites.contains(&tablet.item_id));
        assert_eq!(favourites.count_label(), "1 item");

        assert!(!favourites.toggle(&tablet));
        assert!(favourites.is_empty());
        assert_eq!(favourites.count_label(), "0 items");
    }
}
