//! Product types.

use crate::catalog::ProductCategory;
use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog. Catalog records are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Category tag.
    pub category: ProductCategory,
    /// Unit price.
    pub price: Money,
    /// Image URLs, primary image first.
    pub images: Vec<String>,
    /// Technical specifications, in display order.
    pub specifications: Vec<Specification>,
    /// Whether the product can currently be ordered.
    pub in_stock: bool,
    /// Units on hand.
    pub stock_quantity: u32,
    /// Highlighted on the home page and by the "featured" sort.
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Primary image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Look up a specification by label (case-insensitive).
    pub fn specification(&self, label: &str) -> Option<&Specification> {
        self.specifications
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case(label))
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// Only the empty term matches everything; whitespace is matched literally.
    pub fn matches_text(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// One row of a product's specification table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specification {
    /// Label, e.g. "Capacity".
    pub label: String,
    /// Value as displayed, e.g. "50" or "-196 to 50".
    pub value: String,
    /// Unit, e.g. "L".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Specification {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Value with unit appended, e.g. "50 L".
    pub fn display_value(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }
}
