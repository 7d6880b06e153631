//! Category filter and text search over the loaded catalog.
//!
//! Both steps borrow from the store's product list and return new vectors
//! of references; the source collection is never reordered.

use crate::catalog::Product;
use crate::search::SortOption;

/// Products whose category token equals `token` exactly.
///
/// An unknown token yields an empty list.
pub fn filter_by_category<'a>(products: &'a [Product], token: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.category.as_str() == token)
        .collect()
}

/// Products whose name contains `query`, ignoring case. An empty query keeps everything.
pub fn search<'a>(products: &[&'a Product], query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .copied()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// Search, then order with a stable sort.
pub fn search_and_sort<'a>(
    products: &[&'a Product],
    query: &str,
    sort: SortOption,
) -> Vec<&'a Product> {
    let mut visible = search(products, query);
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::{Currency, Money};

    fn product(id: &str, category: Category, name: &str, price: i64, year: u32) -> Product {
        Product::new(
            id,
            id,
            category,
            name,
            Money::whole(price, Currency::USD),
            year,
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", Category::Phones, "Apple iPhone 11", 700, 2019),
            product("2", Category::Tablets, "Apple iPad Pro", 900, 2020),
            product("3", Category::Phones, "Apple iPhone XS", 500, 2018),
            product("4", Category::Phones, "Samsung Galaxy", 500, 2021),
            product("5", Category::Accessories, "Apple Watch", 300, 2020),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_category_filter() {
        let products = catalog();
        let phones = filter_by_category(&products, "phones");
        assert_eq!(ids(&phones), vec!["1", "3", "4"]);
        assert!(phones.iter().all(|p| p.category == Category::Phones));
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let products = catalog();
        assert!(filter_by_category(&products, "Phones").is_empty());
        assert!(filter_by_category(&products, "laptops").is_empty());
    }

    #[test]
    fn test_search_ignores_case() {
        let products = catalog();
        let all: Vec<&Product> = products.iter().collect();
        let found = search(&all, "IPHONE");
        assert_eq!(ids(&found), vec!["1", "3"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let products = catalog();
        let all: Vec<&Product> = products.iter().collect();
        assert_eq!(search(&all, ""), all);
    }

    #[test]
    fn test_newest_first() {
        let products = catalog();
        let phones = filter_by_category(&products, "phones");
        let sorted = search_and_sort(&phones, "", SortOption::Newest);
        assert_eq!(ids(&sorted), vec!["4", "1", "3"]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = catalog();
        let phones = filter_by_category(&products, "phones");

        let asc = search_and_sort(&phones, "", SortOption::PriceAsc);
        assert_eq!(ids(&asc), vec!["3", "4", "1"]);

        let desc = search_and_sort(&phones, "", SortOption::PriceDesc);
        assert_eq!(ids(&desc), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_alphabetical() {
        let products = catalog();
        let all: Vec<&Product> = products.iter().collect();
        let sorted = search_and_sort(&all, "apple", SortOption::Alphabetically);
        assert_eq!(ids(&sorted), vec!["2", "1", "3", "5"]);
    }

    #[test]
    fn test_input_order_untouched() {
        let products = catalog();
        let phones = filter_by_category(&products, "phones");
        let before = ids(&phones);
        let _ = search_and_sort(&phones, "", SortOption::PriceAsc);
        assert_eq!(ids(&phones), before);
    }
}
