//! Cart and cart items.

use serde::{Deserialize, Serialize};

use crate::cart::CartSummary;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Line key, the product's item slug.
    pub id: ItemId,
    /// Always at least 1.
    pub quantity: i64,
    pub product: Product,
}

impl CartItem {
    /// Line total, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.product.price.try_multiply(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub currency: Currency,
}

impl Cart {
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add a product with quantity 1. Returns `false` if it was already in the cart.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.item_id) {
            return false;
        }
        self.items.push(CartItem {
            id: product.item_id.clone(),
            quantity: 1,
            product: product.clone(),
        });
        true
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() < len_before
    }

    /// Set the quantity of a line. Quantities below 1 are rejected;
    /// removing a line is an explicit [`Cart::remove`].
    pub fn update_quantity(&mut self, id: &ItemId, quantity: i64) -> Result<(), CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    pub fn increment(&mut self, id: &ItemId) -> Result<(), CommerceError> {
        let quantity = self.quantity_of(id)?;
        let next = quantity.checked_add(1).ok_or(CommerceError::Overflow)?;
        self.update_quantity(id, next)
    }

    /// Decrease by one; a line at quantity 1 stays at 1.
    pub fn decrement(&mut self, id: &ItemId) -> Result<(), CommerceError> {
        let quantity = self.quantity_of(id)?;
        if quantity <= 1 {
            return Ok(());
        }
        self.update_quantity(id, quantity - 1)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price × quantity over all lines.
    pub fn total_amount(&self) -> Result<Money, CommerceError> {
        let line_totals = self
            .items
            .iter()
            .map(|item| item.line_total().ok_or(CommerceError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(&line_totals, self.currency)
    }

    /// Sum of quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        Ok(CartSummary {
            total_amount: self.total_amount()?,
            total_quantity: self.total_quantity(),
        })
    }

    fn quantity_of(&self, id: &ItemId) -> Result<i64, CommerceError> {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .map(|item| item.quantity)
            .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))
    }
}
