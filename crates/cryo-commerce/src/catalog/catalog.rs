//! Read-only product catalog.

use crate::catalog::{fixtures, CategorySummary, Product, ProductCategory};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Maximum number of related products shown on a product page.
pub const MAX_RELATED: usize = 4;

/// An ordered, immutable sequence of products.
///
/// Order is significant: it is the tie-break for every sort.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap an existing product list, keeping its order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's built-in eight products.
    pub fn builtin() -> Self {
        Self::new(fixtures::products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Like [`Catalog::get`] but with a typed error for callers that need one.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Featured products in catalog order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Up to [`MAX_RELATED`] other products in the same category.
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(MAX_RELATED)
            .collect()
    }

    /// Every category with its label and product count, including empty ones.
    pub fn categories(&self) -> Vec<CategorySummary> {
        ProductCategory::ALL
            .into_iter()
            .map(|category| CategorySummary {
                category,
                label: category.display_name(),
                count: self
                    .products
                    .iter()
                    .filter(|p| p.category == category)
                    .count(),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
