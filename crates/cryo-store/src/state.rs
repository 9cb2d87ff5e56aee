//! The storefront's state containers.
//!
//! Each container owns its backend and persists a full snapshot under a
//! fixed key on every change. None of them know about each other; the
//! checkout submission is the one place two are touched together.

use crate::{KeyValueStore, Persisted, StoreError};
use chrono::{DateTime, Utc};
use cryo_commerce::admin::{AdminCredentials, AdminSession};
use cryo_commerce::cart::{Cart, PriceBreakdown, PricingPolicy};
use cryo_commerce::catalog::{Catalog, Product, ProductCategory};
use cryo_commerce::checkout::{
    place_order_with, Address, CheckoutDraft, CheckoutForm, CustomerInfo, Order,
};
use cryo_commerce::ids::ProductId;
use cryo_commerce::search::{search, CatalogQuery, ProductFilter, SearchResults, SortOption};
use tracing::info;

pub const CART_KEY: &str = "cart-storage";
pub const CHECKOUT_KEY: &str = "checkout-storage";
pub const ADMIN_KEY: &str = "admin-storage";

/// The shopping cart, persisted under [`CART_KEY`].
#[derive(Debug)]
pub struct CartStore<S> {
    inner: Persisted<Cart, S>,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn load(store: S) -> Result<Self, StoreError> {
        Ok(Self {
            inner: Persisted::load(store, CART_KEY)?,
        })
    }

    pub fn cart(&self) -> &Cart {
        self.inner.get()
    }

    /// Returns the line's new quantity.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<u32, StoreError> {
        self.inner
            .try_update(|cart| cart.add_item(product, quantity).map_err(StoreError::from))
    }

    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<bool, StoreError> {
        self.inner.update(|cart| cart.remove_item(product_id))
    }

    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, StoreError> {
        self.inner.try_update(|cart| {
            cart.update_quantity(product_id, quantity)
                .map_err(StoreError::from)
        })
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.inner.update(Cart::clear)
    }

    pub fn total_items(&self) -> u64 {
        self.cart().total_items()
    }

    pub fn pricing(&self, policy: &PricingPolicy) -> Result<PriceBreakdown, StoreError> {
        Ok(policy.price_cart(self.cart())?)
    }

    pub fn into_store(self) -> S {
        self.inner.into_store()
    }
}

/// Customer details from the last checkout, persisted under [`CHECKOUT_KEY`].
#[derive(Debug)]
pub struct CheckoutStore<S> {
    inner: Persisted<CheckoutDraft, S>,
}

impl<S: KeyValueStore> CheckoutStore<S> {
    pub fn load(store: S) -> Result<Self, StoreError> {
        Ok(Self {
            inner: Persisted::load(store, CHECKOUT_KEY)?,
        })
    }

    pub fn draft(&self) -> &CheckoutDraft {
        self.inner.get()
    }

    pub fn set_customer_info(&mut self, info: CustomerInfo) -> Result<(), StoreError> {
        self.inner.update(|d| d.customer_info = Some(info))
    }

    pub fn set_shipping_address(&mut self, address: Address) -> Result<(), StoreError> {
        self.inner.update(|d| d.shipping_address = Some(address))
    }

    pub fn set_billing_address(&mut self, address: Address) -> Result<(), StoreError> {
        self.inner.update(|d| d.billing_address = Some(address))
    }

    /// Remember everything a submitted form carried.
    pub fn record(&mut self, form: &CheckoutForm) -> Result<(), StoreError> {
        self.inner.replace(CheckoutDraft::from_form(form))
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.inner.reset()
    }

    pub fn into_store(self) -> S {
        self.inner.into_store()
    }
}

/// Place an order from the cart, remember the customer's details, and
/// empty the cart.
///
/// Nothing is written unless the order is accepted.
pub fn submit_checkout<A, B>(
    cart: &mut CartStore<A>,
    checkout: &mut CheckoutStore<B>,
    form: &CheckoutForm,
    policy: &PricingPolicy,
    now: DateTime<Utc>,
) -> Result<Order, StoreError>
where
    A: KeyValueStore,
    B: KeyValueStore,
{
    let order = place_order_with(cart.cart(), form, policy, now)?;
    checkout.record(form)?;
    cart.clear()?;
    info!(order = %order.order_number, "checkout complete, cart cleared");
    Ok(order)
}

/// Admin login flag, persisted under [`ADMIN_KEY`].
#[derive(Debug)]
pub struct AdminStore<S> {
    inner: Persisted<AdminSession, S>,
}

impl<S: KeyValueStore> AdminStore<S> {
    pub fn load(store: S) -> Result<Self, StoreError> {
        Ok(Self {
            inner: Persisted::load(store, ADMIN_KEY)?,
        })
    }

    pub fn session(&self) -> &AdminSession {
        self.inner.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn login(
        &mut self,
        credentials: &AdminCredentials,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.inner.try_update(|session| {
            session
                .login(credentials, username, password, now)
                .map_err(StoreError::from)
        })
    }

    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.inner.update(AdminSession::logout)
    }

    pub fn into_store(self) -> S {
        self.inner.into_store()
    }
}

/// The product listing's search term, filter and sort. Lives only as long
/// as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQueryState {
    query: CatalogQuery,
}

impl CatalogQueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
    }

    pub fn set_filter(&mut self, filter: ProductFilter) {
        self.query.filter = filter;
    }

    pub fn set_category(&mut self, category: ProductCategory, selected: bool) {
        self.query.filter.set_category(category, selected);
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.query.sort = sort;
    }

    pub fn reset(&mut self) {
        self.query.reset();
    }

    /// One page of the listing for the current query.
    pub fn page<'a>(
        &self,
        catalog: &'a Catalog,
        page: usize,
        per_page: usize,
    ) -> SearchResults<&'a Product> {
        search(catalog, &self.query, page, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileStore, MemoryStore};
    use cryo_commerce::CommerceError;

    fn catalog_product(id: &str) -> Product {
        Catalog::builtin().get(&ProductId::new(id)).unwrap().clone()
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            customer: CustomerInfo {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                phone: "6175550100".into(),
                company: None,
            },
            shipping_address: Address::new("100 Cold Way", "Boston", "MA", "02110", "United States"),
            accept_terms: true,
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_cart_survives_reload() {
        let mut carts = CartStore::load(MemoryStore::new()).unwrap();
        carts.add_item(&catalog_product("4"), 2).unwrap();
        carts.add_item(&catalog_product("8"), 1).unwrap();

        let reloaded = CartStore::load(carts.into_store()).unwrap();
        assert_eq!(reloaded.total_items(), 3);
        assert_eq!(reloaded.cart().lines()[0].product.id.as_str(), "4");
    }

    #[test]
    fn test_rejected_add_leaves_store_untouched() {
        let mut carts = CartStore::load(MemoryStore::new()).unwrap();
        let err = carts.add_item(&catalog_product("4"), 0).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Commerce(CommerceError::InvalidQuantity(0))
        ));
        assert!(!carts.into_store().exists(CART_KEY).unwrap());
    }

    #[test]
    fn test_checkout_clears_cart_and_records_draft() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut carts = CartStore::load(FileStore::open(&path)).unwrap();
        let mut checkout = CheckoutStore::load(FileStore::open(&path)).unwrap();
        carts.add_item(&catalog_product("1"), 2).unwrap();

        let order = submit_checkout(
            &mut carts,
            &mut checkout,
            &form(),
            &PricingPolicy::default(),
            Utc::now(),
        )
        .unwrap();
        assert!(order.pricing.has_free_shipping());
        assert!(carts.cart().is_empty());

        let reloaded = CheckoutStore::load(FileStore::open(&path)).unwrap();
        let draft = reloaded.draft();
        assert_eq!(draft.customer_info.as_ref().unwrap().first_name, "Ada");
        assert_eq!(draft.billing_address, draft.shipping_address);

        let keys = FileStore::open(&path).keys().unwrap();
        assert_eq!(keys, vec![CART_KEY, CHECKOUT_KEY]);
    }

    #[test]
    fn test_failed_checkout_keeps_cart() {
        let mut carts = CartStore::load(MemoryStore::new()).unwrap();
        let mut checkout = CheckoutStore::load(MemoryStore::new()).unwrap();
        carts.add_item(&catalog_product("4"), 1).unwrap();

        let mut bad = form();
        bad.accept_terms = false;
        let err = submit_checkout(
            &mut carts,
            &mut checkout,
            &bad,
            &PricingPolicy::default(),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Commerce(CommerceError::Validation(_))));
        assert_eq!(carts.total_items(), 1);
        assert!(checkout.draft().is_empty());
    }

    #[test]
    fn test_checkout_draft_fields() {
        let mut checkout = CheckoutStore::load(MemoryStore::new()).unwrap();
        checkout
            .set_shipping_address(Address::new("1 Main Street", "Denver", "CO", "80202", "US"))
            .unwrap();
        assert!(checkout.draft().customer_info.is_none());
        assert!(checkout.draft().shipping_address.is_some());
        checkout.clear().unwrap();
        assert!(checkout.draft().is_empty());
    }

    #[test]
    fn test_admin_login_persists() {
        let mut admin = AdminStore::load(MemoryStore::new()).unwrap();
        let creds = AdminCredentials::default();
        assert!(admin.login(&creds, "admin", "wrong", Utc::now()).is_err());
        assert!(!admin.is_authenticated());

        admin.login(&creds, "admin", "cryotech2024", Utc::now()).unwrap();
        let mut admin = AdminStore::load(admin.into_store()).unwrap();
        assert!(admin.is_authenticated());

        admin.logout().unwrap();
        let admin = AdminStore::load(admin.into_store()).unwrap();
        assert!(!admin.is_authenticated());
    }

    #[test]
    fn test_query_state_reset() {
        let catalog = Catalog::builtin();
        let mut state = CatalogQueryState::new();
        state.set_search_term("dewar");
        state.set_category(ProductCategory::Dewars, true);
        state.set_sort(SortOption::PriceDesc);
        let page = state.page(&catalog, 1, 12);
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "8"]);

        state.reset();
        assert_eq!(state.query(), &CatalogQuery::default());
        assert_eq!(state.page(&catalog, 1, 12).len(), 8);
    }
}
