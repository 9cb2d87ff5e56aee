//! Catalog search module.
//!
//! Contains the filter, sort and pagination types and the listing pipeline
//! that ties them together.

mod filter;
mod pipeline;
mod query;
mod results;

pub use filter::{PriceRange, ProductFilter, DEFAULT_MAX_PRICE_UNITS};
pub use pipeline::{filter_and_sort, paginate, search};
pub use query::{CatalogQuery, SortOption};
pub use results::{Pagination, SearchResults, DEFAULT_PAGE_SIZE};
