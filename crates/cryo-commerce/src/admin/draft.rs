//! Admin product form.

use crate::catalog::{Product, ProductCategory};
use crate::ids::ProductId;
use crate::money::Money;
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A product as entered in the admin form.
///
/// Raw values are kept so that every problem can be reported at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    /// Category tag, e.g. `dewars`.
    pub category: String,
    pub price: Money,
    pub stock_quantity: i64,
    #[serde(default)]
    pub featured: bool,
}

impl ProductDraft {
    /// Pre-fill the form for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.as_str().to_string(),
            price: product.price,
            stock_quantity: i64::from(product.stock_quantity),
            featured: product.featured,
        }
    }

    pub fn validate(&self) -> Result<ProductCategory, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_min_chars("name", &self.name, 2, "Name must be at least 2 characters");
        errors.require_min_chars(
            "description",
            &self.description,
            10,
            "Description must be at least 10 characters",
        );
        let category = self.category.parse::<ProductCategory>().ok();
        if category.is_none() {
            errors.add("category", "Category is required");
        }
        if self.price.is_negative() {
            errors.add("price", "Price must be positive");
        }
        if self.stock_quantity < 0 {
            errors.add("stock_quantity", "Stock quantity must be positive");
        }

        match category {
            Some(category) if errors.is_empty() => Ok(category),
            _ => Err(errors),
        }
    }
}

/// Accept a validated draft. The catalog is fixed, so this only logs.
pub fn submit_draft(draft: &ProductDraft, editing: Option<&ProductId>) -> Result<(), ValidationErrors> {
    let category = draft.validate()?;
    match editing {
        Some(id) => info!(product = %id, name = %draft.name, %category, "product update submitted"),
        None => info!(name = %draft.name, %category, "product submitted"),
    }
    Ok(())
}

/// Record a delete request. The catalog is fixed, so this only logs.
pub fn request_delete(id: &ProductId) {
    info!(product = %id, "product delete requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_existing_product_is_valid() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            let draft = ProductDraft::from_product(product);
            assert_eq!(draft.validate().unwrap(), product.category);
        }
    }

    #[test]
    fn test_collects_every_failure() {
        let draft = ProductDraft {
            name: "X".into(),
            description: "short".into(),
            category: "pumps".into(),
            price: Money::usd(-1),
            stock_quantity: -3,
            featured: false,
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("price"), Some("Price must be positive"));
    }

    #[test]
    fn test_zero_price_and_stock_allowed() {
        let draft = ProductDraft {
            name: "Dewar cap".into(),
            description: "Replacement neck cap".into(),
            category: "accessories".into(),
            price: Money::usd(0),
            stock_quantity: 0,
            featured: false,
        };
        assert!(submit_draft(&draft, None).is_ok());
    }
}
