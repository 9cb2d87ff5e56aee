//! Product filter: category set, price range, stock flag.

use crate::catalog::{Product, ProductCategory};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Upper bound of the default price range, in whole dollars.
pub const DEFAULT_MAX_PRICE_UNITS: i64 = 200_000;

/// Inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Both bounds inclusive. An inverted range contains nothing.
    pub fn contains(&self, price: &Money) -> bool {
        *price >= self.min && *price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Money::zero(Currency::USD),
            max: Money::from_units(DEFAULT_MAX_PRICE_UNITS, Currency::USD),
        }
    }
}

/// Filter applied to the catalog. All predicates must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Selected categories. Empty means no category restriction.
    pub categories: BTreeSet<ProductCategory>,
    pub price_range: PriceRange,
    /// Only show products that are in stock.
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn in_stock_only(mut self, only: bool) -> Self {
        self.in_stock_only = only;
        self
    }

    /// Check or uncheck a category, as the sidebar checkboxes do.
    pub fn set_category(&mut self, category: ProductCategory, selected: bool) {
        if selected {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    pub fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(&product.price)
    }

    pub fn matches_stock(&self, product: &Product) -> bool {
        !self.in_stock_only || product.in_stock
    }

    /// Category, price and stock predicates combined.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_price(product) && self.matches_stock(product)
    }

    /// True when nothing narrows the catalog.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
