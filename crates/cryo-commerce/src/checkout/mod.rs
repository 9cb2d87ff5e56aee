//! Checkout module.
//!
//! Contains customer and address records, the checkout form, and order
//! placement.

mod address;
mod form;
mod order;

pub use address::{Address, CustomerInfo, DEFAULT_COUNTRY};
pub use form::{CheckoutDraft, CheckoutForm};
pub use order::{place_order, place_order_with, Order, OrderLine, OrderStatus};
