//! Sort and page-size options for the listing page.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::catalog::Product;

/// Ordering of the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Most recent release year first.
    #[default]
    Newest,
    /// Name A-Z, ignoring case.
    Alphabetically,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
}

impl SortOption {
    /// Options in the order the sort dropdown lists them.
    pub const ALL: [SortOption; 4] = [
        SortOption::Newest,
        SortOption::Alphabetically,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
    ];

    /// URL token.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Alphabetically => "alphabetically",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        SortOption::ALL.into_iter().find(|s| s.as_str() == token)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Alphabetically => "Alphabetically",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
        }
    }

    /// Comparator for a stable sort.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Newest => b.year.cmp(&a.year),
            SortOption::Alphabetically => a
                .name
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.name.chars().flat_map(char::to_lowercase)),
            SortOption::PriceAsc => a.price.cmp_amount(&b.price),
            SortOption::PriceDesc => b.price.cmp_amount(&a.price),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of products per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PerPage {
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "16")]
    Sixteen,
    /// Everything on one page.
    #[default]
    #[serde(rename = "all")]
    All,
}

impl PerPage {
    /// Options in the order the page-size dropdown lists them.
    pub const ALL: [PerPage; 4] = [PerPage::Four, PerPage::Eight, PerPage::Sixteen, PerPage::All];

    /// URL token.
    pub fn as_str(&self) -> &'static str {
        match self {
            PerPage::Four => "4",
            PerPage::Eight => "8",
            PerPage::Sixteen => "16",
            PerPage::All => "all",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        PerPage::ALL.into_iter().find(|p| p.as_str() == token)
    }

    /// Page size, `None` for [`PerPage::All`].
    pub fn size(&self) -> Option<usize> {
        match self {
            PerPage::Four => Some(4),
            PerPage::Eight => Some(8),
            PerPage::Sixteen => Some(16),
            PerPage::All => None,
        }
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
