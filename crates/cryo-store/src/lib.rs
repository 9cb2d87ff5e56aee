//! Key-value snapshot store and persisted state for CryoCommerce.
//!
//! Stands in for browser local storage: each piece of storefront state is
//! written as a JSON snapshot under a fixed key, either in memory or in a
//! single JSON file.
//!
//! # Example
//!
//! ```rust
//! use cryo_commerce::catalog::Catalog;
//! use cryo_commerce::ids::ProductId;
//! use cryo_store::{CartStore, MemoryStore};
//!
//! let catalog = Catalog::builtin();
//! let mut carts = CartStore::load(MemoryStore::new()).unwrap();
//! carts.add_item(catalog.get(&ProductId::new("4")).unwrap(), 2).unwrap();
//!
//! // A fresh container over the same backend sees the same cart.
//! let carts = CartStore::load(carts.into_store()).unwrap();
//! assert_eq!(carts.total_items(), 2);
//! ```

mod error;
mod kv;
mod snapshot;
mod state;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::{Persisted, SnapshotData};
pub use state::{
    submit_checkout, AdminStore, CartStore, CatalogQueryState, CheckoutStore, ADMIN_KEY, CART_KEY,
    CHECKOUT_KEY,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AdminStore, CartStore, CatalogQueryState, CheckoutStore, FileStore, KeyValueStore,
        MemoryStore, StoreError,
    };
}
