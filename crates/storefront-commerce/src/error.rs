//! Commerce error types.

use thiserror::Error;

/// Errors from catalog lookups, cart edits and catalog loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// No product with this item slug.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Cart quantities start at 1.
    #[error("Invalid quantity: {0} (must be at least 1)")]
    InvalidQuantity(i64),

    /// Amounts in different currencies were summed.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// The product source could not deliver the catalog.
    #[error("Failed to load products: {0}")]
    LoadFailed(String),

    /// The catalog was not valid product JSON.
    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Malformed(e.to_string())
    }
}
