//! Category listing page state.
//!
//! [`derive_listing`] runs the pipeline (category → search → sort → page) in
//! one call, so a caller never observes a half-applied result.
//! [`ListingState`] adds the store's load status and the empty states on top.

use serde::Serialize;
use storefront_commerce::catalog::{capitalize_first, Product};
use storefront_commerce::search::{
    filter_by_category, paginate, search_and_sort, Pagination,
};
use storefront_commerce::store::Store;

use crate::breadcrumbs::{breadcrumbs, Crumb};
use crate::location::Location;
use crate::params::ViewParams;

/// The derived collections for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub params: ViewParams,
    /// Products of the route's category, in catalog order.
    pub category_products: Vec<&'a Product>,
    /// Category products matching the search, sorted.
    pub visible_products: Vec<&'a Product>,
    /// The slice of `visible_products` for the requested page.
    pub products_on_page: Vec<&'a Product>,
    pub pagination: Pagination,
}

/// Run the listing pipeline for `location` over `products`.
pub fn derive_listing<'a>(products: &'a [Product], location: &Location) -> Listing<'a> {
    let params = ViewParams::from_params(&location.params);
    let category_products = filter_by_category(products, location.category_token());
    let visible_products = search_and_sort(&category_products, &params.query, params.sort);
    let page = paginate(&visible_products, params.per_page, params.page);

    Listing {
        params,
        category_products,
        visible_products,
        products_on_page: page.items,
        pagination: page.pagination,
    }
}

/// Title, count, controls and breadcrumbs shown above the product grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingHeader {
    /// Category token from the route.
    pub category: String,
    /// Category with its first letter upper-cased.
    pub title: String,
    /// Number of products in the category, before search.
    pub models_count: usize,
    pub params: ViewParams,
    pub breadcrumbs: Vec<Crumb>,
}

/// What the listing page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingState<'a> {
    /// The catalog is still loading.
    Loading,
    /// The catalog failed to load; the page offers a retry.
    Failed { message: String },
    /// A search is active but nothing is on this page. Controls stay visible
    /// so the shopper can change the search.
    NoMatches { header: ListingHeader, message: String },
    /// Nothing to show and no search active.
    Empty { message: String },
    Ready {
        header: ListingHeader,
        products: Vec<&'a Product>,
        pagination: Pagination,
        /// Whether to render the page selector.
        show_pagination: bool,
    },
}

impl<'a> ListingState<'a> {
    /// Decide what to render. `search_input` is the text currently in the
    /// search box, which may run ahead of the committed `query` parameter.
    pub fn derive(store: &'a Store, location: &Location, search_input: &str) -> Self {
        if store.is_loading {
            return ListingState::Loading;
        }
        if let Some(message) = &store.error_message {
            return ListingState::Failed {
                message: message.clone(),
            };
        }

        let listing = derive_listing(&store.products, location);
        let category = location.category_token().to_string();

        if listing.products_on_page.is_empty() {
            if search_input.is_empty() {
                return ListingState::Empty {
                    message: format!("There are no {} yet", category),
                };
            }
            return ListingState::NoMatches {
                message: format!("There are no {} matching the query", category),
                header: header(&listing, location),
            };
        }

        let header = header(&listing, location);
        ListingState::Ready {
            header,
            show_pagination: listing.pagination.is_visible(),
            pagination: listing.pagination,
            products: listing.products_on_page,
        }
    }
}

fn header(listing: &Listing<'_>, location: &Location) -> ListingHeader {
    let category = location.category_token();
    ListingHeader {
        category: category.to_string(),
        title: capitalize_first(category),
        models_count: listing.category_products.len(),
        params: listing.params.clone(),
        breadcrumbs: breadcrumbs(&location.path),
    }
}
