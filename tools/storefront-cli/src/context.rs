//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::prelude::Store;
use tracing::{debug, warn};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;
use crate::source::FileSource;

pub struct Context {
    pub config: CliConfig,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load the config named on the command line, or the nearest one found
    /// walking up from the working directory. `products` overrides the
    /// configured catalog.
    pub fn load(config_path: Option<&str>, products: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let mut config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => discover_config(&cwd).unwrap_or_default(),
        };

        if let Some(products) = products {
            config.catalog.products = products;
        }

        Ok(Self { config, output, cwd })
    }

    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the configured catalog into a fresh store. A failed load is kept
    /// on the store rather than returned, the same as on the page.
    pub async fn load_store(&self) -> Store {
        let source = FileSource::new(self.resolve_path(&self.config.catalog.products));
        let mut store = Store::new();
        store.fetch_products(&source).await;
        store
    }
}

/// First readable config in `start` or any of its ancestors. A file that
/// exists but fails to parse is skipped with a warning.
fn discover_config(start: &Path) -> Option<CliConfig> {
    let candidates = start
        .ancestors()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .filter(|path| path.is_file());

    for path in candidates {
        let Some(path_str) = path.to_str() else {
            continue;
        };
        match CliConfig::load(path_str) {
            Ok(config) => {
                debug!(path = path_str, "using config file");
                return Some(config);
            }
            Err(e) => warn!(path = path_str, error = %e, "skipping unreadable config"),
        }
    }

    None
}
