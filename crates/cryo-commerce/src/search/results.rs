//! Search results and pagination.

use serde::{Deserialize, Serialize};

/// Products per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages. Zero when nothing matched.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. Page 0 is read as page 1 and a zero page
    /// size as 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page);

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
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Whether the requested page lies past the last one.
    pub fn is_out_of_range(&self) -> bool {
        self.offset() >= self.total
    }

    /// Start item number (1-indexed), 0 when the page is empty.
    pub fn start_item(&self) -> usize {
        if self.is_out_of_range() {
            0
        } else {
            self.offset() + 1
        }
    }

    /// End item number, 0 when the page is empty.
    pub fn end_item(&self) -> usize {
        if self.is_out_of_range() {
            0
        } else {
            self.page.saturating_mul(self.per_page).min(self.total)
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0)
    }
}

/// One page of results plus the pagination that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Matching items across all pages.
    pub fn total(&self) -> usize {
        self.pagination.total
    }
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 41);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let p = Pagination::new(0, 12, 8);
        assert_eq!(p.page, 1);
        assert_eq!(p.offset(), 0);
        assert!(!p.has_prev);
    }

    #[test]
    fn test_empty_total_has_no_pages() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_out_of_range_page() {
        let p = Pagination::new(2, 12, 8);
        assert!(p.is_out_of_range());
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 0);
    }
}
