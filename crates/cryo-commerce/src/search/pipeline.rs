//! The listing pipeline: text search, filter, stable sort, paginate.
//!
//! Pure functions over a product slice. Nothing here touches the catalog's
//! order, so equal keys always come back in catalog order.

use crate::catalog::{Catalog, Product};
use crate::search::{CatalogQuery, Pagination, SearchResults};
use tracing::debug;

/// Products matching the query's term and filter, sorted by its sort key.
pub fn filter_and_sort<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let mut matched: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();
    // `sort_by` is stable.
    matched.sort_by(|a, b| query.sort.compare(a, b));
    matched
}

/// Slice one page out of an already-sorted list.
///
/// A page past the end yields no items; `total` still reports the full
/// match count.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> SearchResults<T> {
    let pagination = Pagination::new(page, per_page, items.len());
    let start = pagination.offset().min(items.len());
    let end = start.saturating_add(pagination.per_page).min(items.len());
    SearchResults::new(items[start..end].to_vec(), pagination)
}

/// Run the full listing pipeline against a catalog.
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &CatalogQuery,
    page: usize,
    per_page: usize,
) -> SearchResults<&'a Product> {
    let matched = filter_and_sort(catalog.products(), query);
    let results = paginate(&matched, page, per_page);
    debug!(
        term = %query.search_term,
        sort = %query.sort,
        matched = results.total(),
        page = results.pagination.page,
        returned = results.len(),
        "catalog search"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCategory;
    use crate::money::Money;
    use crate::search::{ProductFilter, SortOption, DEFAULT_PAGE_SIZE};

    fn ids(items: &[&Product]) -> Vec<String> {
        items.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_default_query_sorts_by_name() {
        let catalog = Catalog::builtin();
        let results = search(&catalog, &CatalogQuery::default(), 1, DEFAULT_PAGE_SIZE);
        assert_eq!(results.len(), 8);
        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_by_key(|n| n.to_lowercase());
        assert_eq!(names, sorted);
        assert_eq!(names[0], "Cryogenic Ball Valve DN50");
    }

    #[test]
    fn test_price_sorts() {
        let catalog = Catalog::builtin();
        let asc = filter_and_sort(
            catalog.products(),
            &CatalogQuery::new().with_sort(SortOption::PriceAsc),
        );
        assert_eq!(asc.first().unwrap().id.as_str(), "8");
        assert_eq!(asc.last().unwrap().id.as_str(), "2");

        let desc = filter_and_sort(
            catalog.products(),
            &CatalogQuery::new().with_sort(SortOption::PriceDesc),
        );
        assert_eq!(desc.first().unwrap().id.as_str(), "2");
        assert!(desc
            .windows(2)
            .all(|w| w[0].price.amount_cents >= w[1].price.amount_cents));
    }

    #[test]
    fn test_featured_sort_is_stable() {
        let catalog = Catalog::builtin();
        let sorted = filter_and_sort(
            catalog.products(),
            &CatalogQuery::new().with_sort(SortOption::Featured),
        );
        assert_eq!(ids(&sorted), vec!["1", "2", "8", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let catalog = Catalog::builtin();
        let query = CatalogQuery::new()
            .with_search("dewar")
            .with_filter(ProductFilter::new().with_price_range(Money::usd(0), Money::usd(100_000)));
        let matched = filter_and_sort(catalog.products(), &query);
        assert_eq!(ids(&matched), vec!["8"]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::builtin();
        let query = CatalogQuery::new().with_filter(
            ProductFilter::new()
                .with_category(ProductCategory::Dewars)
                .with_category(ProductCategory::ValvesFittings),
        );
        let matched = filter_and_sort(catalog.products(), &query);
        assert_eq!(ids(&matched), vec!["4", "1", "8"]);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=30).collect();
        let page = paginate(&items, 3, 12);
        assert_eq!(page.items, (25..=30).collect::<Vec<_>>());
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let catalog = Catalog::builtin();
        let results = search(&catalog, &CatalogQuery::default(), 2, DEFAULT_PAGE_SIZE);
        assert!(results.is_empty());
        assert_eq!(results.total(), 8);
    }

    #[test]
    fn test_no_matches() {
        let catalog = Catalog::builtin();
        let results = search(&catalog, &CatalogQuery::new().with_search("turbine"), 1, 12);
        assert!(results.is_empty());
        assert_eq!(results.pagination.total_pages, 0);
    }
}
