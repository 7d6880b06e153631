//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_view::ListingConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: &[&str] = &["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the product catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing page tunables.
    #[serde(default)]
    pub listing: ListingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Catalog location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file holding an array of products, relative to the working directory.
    #[serde(default = "default_products")]
    pub products: String,
}

fn default_products() -> String {
    "products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: default_products(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    let defaults = ListingConfig::default();
    format!(
        r#"# Storefront configuration

[catalog]
# JSON array of products
products = "{products}"

[listing]
# Milliseconds of quiet typing before the search text reaches the URL
debounce_ms = {debounce_ms}
# Page links shown around the current page
page_window = {page_window}
"#,
        products = default_products(),
        debounce_ms = defaults.debounce_ms,
        page_window = defaults.page_window,
    )
}
