//! End-to-end behaviour of the listing page: URL in, products out, and the
//! search box feeding back into the URL.

use std::sync::Arc;
use std::time::Duration;

use storefront_commerce::prelude::*;
use storefront_view::{
    derive_listing, ListingConfig, ListingState, Location, MemoryNavigator, Navigator,
    QueryCommitter,
};

fn catalog() -> Vec<Product> {
    let mut products = Vec::new();
    for i in 0..12u32 {
        products.push(Product::new(
            format!("phone-{i}"),
            format!("phone-{i}"),
            Category::Phones,
            format!("Phone Model {i}"),
            Money::whole(100 + i64::from(i % 3) * 50, Currency::USD),
            2010 + i,
        ));
    }
    products.push(Product::new(
        "tablet-0",
        "tablet-0",
        Category::Tablets,
        "Tablet Model 0",
        Money::whole(300, Currency::USD),
        2020,
    ));
    products
}

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn collections_nest() {
    let products = catalog();
    let location = Location::parse("/phones?query=model+1&sort=price-asc&perPage=4&page=1");
    let listing = derive_listing(&products, &location);

    assert!(listing.category_products.len() <= products.len());
    for product in &listing.visible_products {
        assert!(listing.category_products.contains(product));
    }
    for product in &listing.products_on_page {
        assert!(listing.visible_products.contains(product));
    }
    // "model 1", "model 10", "model 11"
    assert_eq!(listing.visible_products.len(), 3);
}

#[test]
fn second_page_of_twelve() {
    let products = catalog();
    let location = Location::parse("/phones?sort=alphabetically&perPage=4&page=2");
    let listing = derive_listing(&products, &location);

    assert_eq!(listing.pagination.total_pages, 3);
    assert_eq!(
        ids(&listing.products_on_page),
        ids(&listing.visible_products[4..8])
    );
}

#[test]
fn out_of_range_page_is_empty_not_an_error() {
    let products = catalog();
    let location = Location::parse("/phones?perPage=4&page=99");
    let listing = derive_listing(&products, &location);

    assert!(listing.products_on_page.is_empty());
    assert_eq!(listing.visible_products.len(), 12);
}

#[test]
fn equal_prices_keep_catalog_order() {
    let products = catalog();
    let location = Location::parse("/phones?sort=price-asc");
    let listing = derive_listing(&products, &location);

    let cheapest: Vec<String> = ids(&listing.visible_products[..4]);
    assert_eq!(cheapest, vec!["phone-0", "phone-3", "phone-6", "phone-9"]);
}

#[test]
fn bogus_sort_falls_back_to_newest() {
    let products = catalog();
    let listing = derive_listing(&products, &Location::parse("/phones?sort=bogus"));
    assert_eq!(listing.visible_products[0].id.as_str(), "phone-11");
}

#[tokio::test(start_paused = true)]
async fn typing_filters_the_listing_after_the_quiet_period() {
    let store = Store::with_products(catalog());
    let navigator = MemoryNavigator::new("/phones?perPage=4");
    let mut search =
        QueryCommitter::new(Arc::new(navigator.clone()), &ListingConfig::default()).unwrap();

    search.on_input("model 1");

    // The URL has not changed yet, so the full category is still listed.
    let location = navigator.location();
    match ListingState::derive(&store, &location, search.echo()) {
        ListingState::Ready { pagination, .. } => assert_eq!(pagination.total, 12),
        other => panic!("unexpected state: {other:?}"),
    }

    tokio::time::sleep(Duration::from_millis(1001)).await;

    let location = navigator.location();
    assert_eq!(location.params.get("query"), Some("model 1"));
    match ListingState::derive(&store, &location, search.echo()) {
        ListingState::Ready {
            pagination,
            show_pagination,
            ..
        } => {
            assert_eq!(pagination.total, 3);
            assert!(!show_pagination);
        }
        other => panic!("unexpected state: {other:?}"),
    }

    search.on_input("nokia");
    tokio::time::sleep(Duration::from_millis(1001)).await;
    let location = navigator.location();
    assert!(matches!(
        ListingState::derive(&store, &location, search.echo()),
        ListingState::NoMatches { .. }
    ));
}

#[test]
fn listing_state_serializes_with_a_state_tag() {
    let store = Store::with_products(catalog());
    let location = Location::parse("/tablets?query=nokia");
    let state = ListingState::derive(&store, &location, "nokia");

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["state"], "no_matches");
    assert_eq!(json["message"], "There are no tablets matching the query");
    assert_eq!(json["header"]["models_count"], 1);
    assert_eq!(json["header"]["breadcrumbs"][0]["label"], "Tablets");
}
