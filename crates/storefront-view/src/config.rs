//! Listing page settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the listing page, usually read from the `[listing]` table
/// of `storefront.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Quiet period before typed search text is written to the URL.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Maximum number of page links in the page selector.
    #[serde(default = "default_page_window")]
    pub page_window: usize,
}

fn default_debounce_ms() -> u64 {
    1000
}

fn default_page_window() -> usize {
    5
}

impl ListingConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            page_window: default_page_window(),
        }
    }
}
