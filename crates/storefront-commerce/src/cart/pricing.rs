//! Cart totals.

use serde::Serialize;

use crate::money::Money;

/// Totals shown under the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub total_amount: Money,
    pub total_quantity: i64,
}

impl CartSummary {
    /// `"Total for 1 item"` / `"Total for N items"`.
    pub fn label(&self) -> String {
        if self.total_quantity == 1 {
            "Total for 1 item".to_string()
        } else {
            format!("Total for {} items", self.total_quantity)
        }
    }
}
