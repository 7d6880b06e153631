//! Listing view parameters read from (and written to) the query string.

use serde::Serialize;
use storefront_commerce::search::{PerPage, SortOption};
use tracing::debug;

use crate::location::SearchParams;

pub const QUERY_PARAM: &str = "query";
pub const SORT_PARAM: &str = "sort";
pub const PER_PAGE_PARAM: &str = "perPage";
pub const PAGE_PARAM: &str = "page";

/// Everything that decides which products the listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewParams {
    /// Search text, empty for no filter.
    pub query: String,
    pub sort: SortOption,
    pub per_page: PerPage,
    /// 1-based page number.
    pub page: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: SortOption::Newest,
            per_page: PerPage::All,
            page: 1,
        }
    }
}

impl ViewParams {
    /// Read the parameters, substituting defaults for anything missing or malformed.
    pub fn from_params(params: &SearchParams) -> Self {
        let query = params.get(QUERY_PARAM).unwrap_or_default().to_string();

        let sort = match params.get(SORT_PARAM) {
            None => SortOption::default(),
            Some(raw) => SortOption::parse(raw).unwrap_or_else(|| {
                debug!(value = raw, "unrecognized sort, using default");
                SortOption::default()
            }),
        };

        let per_page = match params.get(PER_PAGE_PARAM) {
            None => PerPage::default(),
            Some(raw) => PerPage::parse(raw).unwrap_or_else(|| {
                debug!(value = raw, "unrecognized perPage, using default");
                PerPage::default()
            }),
        };

        let page = match params.get(PAGE_PARAM) {
            None => 1,
            Some(raw) => parse_page(raw).unwrap_or_else(|| {
                debug!(value = raw, "invalid page, using 1");
                1
            }),
        };

        Self {
            query,
            sort,
            per_page,
            page,
        }
    }

    pub fn from_query_string(query: &str) -> Self {
        Self::from_params(&SearchParams::parse(query))
    }
}

/// A positive integer, or `None`.
fn parse_page(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|page| *page > 0)
}

impl SearchParams {
    /// Commit search text. Surrounding whitespace is trimmed and an empty
    /// value removes the parameter so URLs stay canonical.
    pub fn set_query(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.remove(QUERY_PARAM);
        } else {
            self.set(QUERY_PARAM, value);
        }
    }

    /// Change the ordering and go back to the first page.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.set(SORT_PARAM, sort.as_str());
        self.remove(PAGE_PARAM);
    }

    /// Change the page size and go back to the first page.
    pub fn set_per_page(&mut self, per_page: PerPage) {
        self.set(PER_PAGE_PARAM, per_page.as_str());
        self.remove(PAGE_PARAM);
    }

    /// Select a page; page 1 is the default and is not written.
    pub fn set_page(&mut self, page: usize) {
        if page <= 1 {
            self.remove(PAGE_PARAM);
        } else {
            self.set(PAGE_PARAM, page.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_query_string() {
        assert_eq!(ViewParams::from_query_string(""), ViewParams::default());
    }

    #[test]
    fn test_reads_all_params() {
        let params =
            ViewParams::from_query_string("query=iphone&sort=price-desc&perPage=8&page=3");
        assert_eq!(
            params,
            ViewParams {
                query: "iphone".to_string(),
                sort: SortOption::PriceDesc,
                per_page: PerPage::Eight,
                page: 3,
            }
        );
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let params = ViewParams::from_query_string("sort=bogus&perPage=7&page=abc");
        assert_eq!(params.sort, SortOption::Newest);
        assert_eq!(params.per_page, PerPage::All);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn test_page_must_be_positive() {
        assert_eq!(ViewParams::from_query_string("page=0").page, 1);
        assert_eq!(ViewParams::from_query_string("page=-2").page, 1);
        assert_eq!(ViewParams::from_query_string("page=2.5").page, 1);
        assert_eq!(ViewParams::from_query_string("page=").page, 1);
        assert_eq!(ViewParams::from_query_string("page=4").page, 4);
    }

    #[test]
    fn test_set_query_trims_and_removes() {
        let mut params = SearchParams::parse("sort=newest");
        params.set_query("  watch ");
        assert_eq!(params.to_query_string(), "sort=newest&query=watch");

        params.set_query("   ");
        assert_eq!(params.to_query_string(), "sort=newest");
    }

    #[test]
    fn test_set_sort_resets_page_and_keeps_others() {
        let mut params = SearchParams::parse("query=ipad&page=3&perPage=4");
        params.set_sort(SortOption::PriceAsc);
        assert_eq!(
            params.to_query_string(),
            "query=ipad&perPage=4&sort=price-asc"
        );
    }

    #[test]
    fn test_set_page() {
        let mut params = SearchParams::parse("perPage=4");
        params.set_page(2);
        assert_eq!(params.get(PAGE_PARAM), Some("2"));
        params.set_page(1);
        assert!(!params.contains(PAGE_PARAM));
    }
}
