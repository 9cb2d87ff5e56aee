//! Catalog query: search term, filter and sort key.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::ProductFilter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Featured products first.
    Featured,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Featured,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Featured => "featured",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Featured => "Featured",
        }
    }

    /// Comparator for a stable sort. `Equal` keeps catalog order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::NameAsc => collate(&a.name, &b.name),
            SortOption::NameDesc => collate(&b.name, &a.name),
            SortOption::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::Featured => b.featured.cmp(&a.featured),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == key)
            .ok_or_else(|| CommerceError::UnknownSort(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name ordering for display: case-insensitive first, then exact
/// code-point order so distinct names never compare equal.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Everything the product listing needs besides the page number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Free-text term matched against name and description.
    pub search_term: String,
    pub filter: ProductFilter,
    pub sort: SortOption,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_filter(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Text match plus the filter predicates.
    pub fn matches(&self, product: &Product) -> bool {
        product.matches_text(&self.search_term) && self.filter.matches(product)
    }

    /// Back to an empty term, the default filter and `name-asc`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_keys() {
        assert_eq!("price-desc".parse::<SortOption>().unwrap(), SortOption::PriceDesc);
        assert_eq!("FEATURED".parse::<SortOption>().unwrap(), SortOption::Featured);
        assert!("newest".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_collate_ignores_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zeta", "alpha"), Ordering::Greater);
        assert_ne!(collate("Dewar", "dewar"), Ordering::Equal);
    }

    #[test]
    fn test_reset() {
        let mut query = CatalogQuery::new()
            .with_search("dewar")
            .with_sort(SortOption::PriceDesc);
        query.reset();
        assert_eq!(query, CatalogQuery::default());
        assert_eq!(query.sort, SortOption::NameAsc);
    }
}
