//! Shopping cart module.
//!
//! Contains the cart aggregator and the shipping/tax calculator.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{
    PriceBreakdown, PricingPolicy, FLAT_SHIPPING_UNITS, FREE_SHIPPING_THRESHOLD_UNITS,
    TAX_RATE_BPS,
};
