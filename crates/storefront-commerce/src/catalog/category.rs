//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::Product;

/// A top-level product grouping. The serialized token doubles as the
/// first path segment of the category page (`/phones`, `/tablets`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Phones,
    Tablets,
    Accessories,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Phones, Category::Tablets, Category::Accessories];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Phones => "phones",
            Category::Tablets => "tablets",
            Category::Accessories => "accessories",
        }
    }

    /// Exact, case-sensitive token match.
    pub fn parse(token: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == token)
    }

    /// Route path of the category page.
    pub fn path(&self) -> String {
        format!("/{}", self.as_str())
    }

    /// Heading label, e.g. `"Phones"`.
    pub fn title(&self) -> String {
        capitalize_first(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of products in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Count products per category, every category included.
pub fn count_by_category(products: &[Product]) -> Vec<CategoryCount> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: products.iter().filter(|p| p.category == category).count(),
        })
        .collect()
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Category::parse("tablets"), Some(Category::Tablets));
        assert_eq!(Category::parse("Tablets"), None);
        assert_eq!(Category::parse("laptops"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_serde_token() {
        let json = serde_json::to_string(&Category::Accessories).unwrap();
        assert_eq!(json, "\"accessories\"");
    }

    #[test]
    fn test_count_by_category_includes_empty() {
        let price = Money::whole(100, Currency::USD);
        let products = vec![
            Product::new("1", "a", Category::Phones, "A", price, 2020),
            Product::new("2", "b", Category::Phones, "B", price, 2021),
            Product::new("3", "c", Category::Tablets, "C", price, 2019),
        ];

        let counts = count_by_category(&products);
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: Category::Phones, count: 2 },
                CategoryCount { category: Category::Tablets, count: 1 },
                CategoryCount { category: Category::Accessories, count: 0 },
            ]
        );
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("phones"), "Phones");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("éclair"), "Éclair");
    }
}
