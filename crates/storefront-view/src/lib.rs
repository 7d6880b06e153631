//! URL-driven state for the storefront's category listing page.
//!
//! This crate provides:
//! - `Location` / `SearchParams` - the current route and its query string
//! - `ViewParams` - query, sort, page size and page read from the URL with defaults
//! - `derive_listing` / `ListingState` - the filtered, sorted, paginated page
//! - `breadcrumbs` - the crumb trail for a path
//! - `QueryCommitter` - debounced search box that writes `query` to the URL
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_view::*;
//!
//! let navigator = MemoryNavigator::new("/phones?sort=price-asc&perPage=8");
//! let mut search = QueryCommitter::new(Arc::new(navigator.clone()), &ListingConfig::default())?;
//!
//! search.on_input("iphone");
//! // ... one second later the URL carries `query=iphone`
//!
//! let location = navigator.location();
//! match ListingState::derive(&store, &location, search.echo()) {
//!     ListingState::Ready { products, .. } => render(products),
//!     other => render_placeholder(other),
//! }
//! ```

mod breadcrumbs;
mod committer;
mod config;
mod error;
mod listing;
mod location;
mod params;

pub use breadcrumbs::*;
pub use committer::*;
pub use config::*;
pub use error::*;
pub use listing::*;
pub use location::*;
pub use params::*;
