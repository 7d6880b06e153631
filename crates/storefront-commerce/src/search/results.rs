//! Pagination of the visible product list.

use serde::Serialize;

use crate::search::PerPage;

/// Pagination info for one page of results.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    pub per_page: PerPage,
    /// Total number of items across all pages.
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// `page` is clamped to at least 1. With [`PerPage::All`] there is exactly one page.
    pub fn new(page: usize, per_page: PerPage, total: usize) -> Self {
        let page = page.max(1);
        let total_pages = match per_page.size() {
            Some(size) => total.div_ceil(size),
            None => 1,
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        match self.per_page.size() {
            Some(size) => (self.page - 1).saturating_mul(size),
            None => 0,
        }
    }

    /// Whether the page selector should be rendered.
    pub fn is_visible(&self) -> bool {
        self.per_page != PerPage::All && self.total_pages > 1
    }

    /// Page numbers for a selector showing at most `max_visible` entries,
    /// centred on the current page where possible.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if max_visible == 0 || self.total_pages == 0 {
            return Vec::new();
        }
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let current = self.page.min(self.total_pages);
        let half = max_visible / 2;
        let start = current.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }
}

/// One page of items plus its pagination info.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Slice `items` to the requested page.
///
/// Pages past the end yield an empty page rather than an error.
pub fn paginate<T: Clone>(items: &[T], per_page: PerPage, page: usize) -> Page<T> {
    let pagination = Pagination::new(page, per_page, items.len());

    let items = match per_page.size() {
        None => items.to_vec(),
        Some(size) => {
            let start = pagination.offset().min(items.len());
            let end = start.saturating_add(size).min(items.len());
            items[start..end].to_vec()
        }
    };

    Page { items, pagination }
}
