//! Domain types and listing logic for the storefront.
//!
//! - **Catalog**: products, categories, per-category counts
//! - **Cart**: line items, quantity updates, totals
//! - **Favourites**: saved products
//! - **Search**: category filter, text search, ordering, pagination
//! - **Store**: the shared application state handed to every page
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::prelude::*;
//!
//! let phones = filter_by_category(&store.products, "phones");
//! let visible = search_and_sort(&phones, "iphone", SortOption::PriceAsc);
//! let page = paginate(&visible, PerPage::Eight, 2);
//! println!("{} of {} pages", page.pagination.page, page.pagination.total_pages);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod favourites;
pub mod search;
pub mod store;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{count_by_category, Category, CategoryCount, Product};

    // Cart & favourites
    pub use crate::cart::{Cart, CartItem};
    pub use crate::favourites::Favourites;

    // Search
    pub use crate::search::{
        filter_by_category, paginate, search_and_sort, Page, Pagination, PerPage, SortOption,
    };

    // Store
    pub use crate::store::{ProductSource, Store};
}
