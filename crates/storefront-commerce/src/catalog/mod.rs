//! Product catalog module.
//!
//! Contains products, categories and per-category counts.

mod category;
mod product;

pub use category::{capitalize_first, count_by_category, Category, CategoryCount};
pub use product::Product;
