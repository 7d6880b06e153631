//! Cart and favourites driven through the store, the way the product and
//! cart pages use them.

use storefront_commerce::prelude::*;

fn catalog() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "apple-iphone-11-64gb-black",
            Category::Phones,
            "Apple iPhone 11 64GB Black",
            Money::whole(632, Currency::USD),
            2019,
        ),
        Product::new(
            "2",
            "apple-ipad-air-64gb-silver",
            Category::Tablets,
            "Apple iPad Air 64GB Silver",
            Money::new(59950, Currency::USD),
            2020,
        ),
    ]
}

#[test]
fn cart_totals_follow_quantities() {
    let mut store = Store::with_products(catalog());
    let phone = store.find_product("apple-iphone-11-64gb-black").unwrap().clone();
    let tablet = store.find_product("apple-ipad-air-64gb-silver").unwrap().clone();

    assert!(store.cart.add(&phone));
    assert!(store.cart.add(&tablet));
    assert!(!store.cart.add(&phone));

    store.cart.update_quantity(&phone.item_id, 3).unwrap();
    store.cart.decrement(&tablet.item_id).unwrap();

    let summary = store.cart.summary().unwrap();
    assert_eq!(summary.total_quantity, 4);
    assert_eq!(summary.total_amount.display(), "$2495.50");
    assert_eq!(summary.label(), "Total for 4 items");

    assert_eq!(
        store.cart.update_quantity(&phone.item_id, 0),
        Err(CommerceError::InvalidQuantity(0))
    );

    assert!(store.cart.remove(&phone.item_id));
    assert_eq!(store.cart.summary().unwrap().label(), "Total for 1 item");
}

#[test]
fn favourites_toggle_on_and_off() {
    let mut store = Store::with_products(catalog());
    let phone = store.products[0].clone();

    assert!(store.favourites.toggle(&phone));
    assert!(store.favourites.contains(&phone.item_id));
    assert_eq!(store.favourites.count_label(), "1 item");

    assert!(!store.favourites.toggle(&phone));
    assert!(store.favourites.is_empty());
    assert_eq!(store.favourites.count_label(), "0 items");
}

#[test]
fn category_overview_counts_every_category() {
    let counts = count_by_category(&catalog());
    let summary: Vec<(&str, usize)> = counts
        .iter()
        .map(|c| (c.category.as_str(), c.count))
        .collect();
    assert_eq!(summary, vec![("phones", 1), ("tablets", 1), ("accessories", 0)]);
}
