//! Product catalog read from a JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use storefront_commerce::prelude::{CommerceError, Product, ProductSource};
use tracing::debug;

/// Reads a JSON array of products from disk on every fetch.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for FileSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CommerceError> {
        debug!(path = %self.path.display(), "reading catalog");
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CommerceError::LoadFailed(format!("{}: {}", self.path.display(), e)))?;

        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::prelude::Store;

    #[tokio::test]
    async fn test_missing_file_fails_the_store() {
        let source = FileSource::new("/definitely/not/here/products.json");
        let mut store = Store::new();
        store.fetch_products(&source).await;

        let message = store.error_message.unwrap();
        assert!(message.contains("/definitely/not/here/products.json"));
        assert!(store.products.is_empty());
        assert!(!store.is_loading);
    }

    #[tokio::test]
    async fn test_reads_catalog() {
        let path = std::env::temp_dir().join(format!("storefront-cli-{}.json", std::process::id()));
        let json = r#"[{
            "id": "apple-iphone-11-64gb-black",
            "itemId": "apple-iphone-11-64gb-black",
            "category": "phones",
            "name": "Apple iPhone 11 64GB Black",
            "price": 632,
            "fullPrice": 932,
            "year": 2019
        }]"#;
        tokio::fs::write(&path, json).await.unwrap();

        let products = FileSource::new(&path).fetch_products().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(products.len(), 1);
        assert!(products[0].is_discounted());
    }
}
