//! Storefront domain types and logic for CryoCommerce.
//!
//! This crate holds everything the storefront computes, free of I/O:
//!
//! - **Catalog**: the fixed product list, categories, featured and related lookups
//! - **Search**: filter, sort and paginate the catalog
//! - **Cart**: line aggregation, shipping and tax
//! - **Checkout**: form validation and order placement
//! - **Contact**: enquiry validation and receipts
//! - **Admin**: demo login, dashboard figures, product form
//!
//! # Example
//!
//! ```rust
//! use cryo_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let query = CatalogQuery::new().with_sort(SortOption::Featured);
//! let page = search(&catalog, &query, 1, DEFAULT_PAGE_SIZE);
//! assert_eq!(page.items[0].id.as_str(), "1");
//!
//! let mut cart = Cart::new();
//! cart.add_item(page.items[0], 1).unwrap();
//! let pricing = PricingPolicy::default().price_cart(&cart).unwrap();
//! assert_eq!(pricing.total.display(), "$3,381.99");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod validation;

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use validation::{Email, FieldError, ValidationErrors};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::validation::{FieldError, ValidationErrors};

    // Catalog
    pub use crate::catalog::{Catalog, CategorySummary, Product, ProductCategory, Specification};

    // Search
    pub use crate::search::{
        filter_and_sort, paginate, search, CatalogQuery, Pagination, PriceRange, ProductFilter,
        SearchResults, SortOption, DEFAULT_PAGE_SIZE,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, PriceBreakdown, PricingPolicy};

    // Checkout
    pub use crate::checkout::{
        place_order, place_order_with, Address, CheckoutDraft, CheckoutForm, CustomerInfo, Order,
        OrderLine, OrderStatus,
    };

    // Contact
    pub use crate::contact::{submit_contact, ContactCategory, ContactReceipt, ContactRequest};

    // Admin
    pub use crate::admin::{AdminCredentials, AdminSession, Dashboard, ProductDraft};
}
