//! Listing module.
//!
//! Category filter, text search, ordering and pagination for the category page.

mod filter;
mod query;
mod results;

pub use filter::{filter_by_category, search, search_and_sort};
pub use query::{PerPage, SortOption};
pub use results::{paginate, Page, Pagination};
