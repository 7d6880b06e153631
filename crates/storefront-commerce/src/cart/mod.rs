//! Shopping cart module.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::CartSummary;
