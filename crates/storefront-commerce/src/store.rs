//! Shared application state.
//!
//! Pages receive a `&Store` (or a snapshot of one) instead of reaching for a
//! global. Loading goes through a [`ProductSource`] so the catalog can come
//! from a file, an HTTP API or a test fixture.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::cart::Cart;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::favourites::Favourites;

/// Where the product catalog comes from.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError>;
}

/// Products, cart, favourites and load status.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub products: Vec<Product>,
    pub cart: Cart,
    pub favourites: Favourites,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a loaded catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// Load (or reload) the catalog. Also serves as the retry action after a failure.
    ///
    /// On failure the previous products are kept and the error message is
    /// stored for the page to display.
    pub async fn fetch_products(&mut self, source: &dyn ProductSource) {
        self.is_loading = true;
        self.error_message = None;

        match source.fetch_products().await {
            Ok(products) => {
                debug!(count = products.len(), "products loaded");
                self.products = products;
            }
            Err(e) => {
                warn!(error = %e, "failed to load products");
                self.error_message = Some(e.to_string());
            }
        }

        self.is_loading = false;
    }

    pub fn find_product(&self, item_id: &str) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.item_id.as_str() == item_id)
            .ok_or_else(|| CommerceError::ProductNotFound(item_id.to_string()))
    }
}
