//! Product catalog module.
//!
//! Contains the product record, the category set, and the built-in catalog.

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod fixtures;
mod product;

pub use catalog::{Catalog, MAX_RELATED};
pub use category::{CategorySummary, ProductCategory};
pub use product::{Product, Specification};
