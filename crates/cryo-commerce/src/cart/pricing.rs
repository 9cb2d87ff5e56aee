//! Order pricing: shipping, tax and total for a subtotal.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Subtotal at or above which shipping is free, in whole dollars.
pub const FREE_SHIPPING_THRESHOLD_UNITS: i64 = 5000;

/// Shipping charged below the threshold, in whole dollars.
pub const FLAT_SHIPPING_UNITS: i64 = 250;

/// Sales tax in basis points (8%).
pub const TAX_RATE_BPS: u32 = 800;

/// Shipping and tax rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingPolicy {
    pub free_shipping_threshold: Money,
    pub flat_shipping: Money,
    /// Tax rate in basis points.
    pub tax_rate_bps: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::from_units(FREE_SHIPPING_THRESHOLD_UNITS, Currency::USD),
            flat_shipping: Money::from_units(FLAT_SHIPPING_UNITS, Currency::USD),
            tax_rate_bps: TAX_RATE_BPS,
        }
    }
}

impl PricingPolicy {
    /// Build a policy from a percentage tax rate such as `8` or `7.25`.
    pub fn new(
        free_shipping_threshold: Money,
        flat_shipping: Money,
        tax_rate_percent: f64,
    ) -> Result<Self, CommerceError> {
        if !tax_rate_percent.is_finite() || tax_rate_percent < 0.0 || tax_rate_percent > 100.0 {
            return Err(CommerceError::InvalidAmount(format!(
                "tax rate {tax_rate_percent}%"
            )));
        }
        if free_shipping_threshold.is_negative() || flat_shipping.is_negative() {
            return Err(CommerceError::InvalidAmount(
                "shipping amounts must not be negative".to_string(),
            ));
        }
        Ok(Self {
            free_shipping_threshold,
            flat_shipping,
            tax_rate_bps: (tax_rate_percent * 100.0).round() as u32,
        })
    }

    /// Shipping charge for a subtotal.
    pub fn shipping_for(&self, subtotal: &Money) -> Money {
        if subtotal.amount_cents >= self.free_shipping_threshold.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            self.flat_shipping
        }
    }

    /// Tax on a subtotal, rounded half-up to the cent.
    pub fn tax_for(&self, subtotal: &Money) -> Money {
        subtotal.apply_basis_points(self.tax_rate_bps)
    }

    /// Full breakdown for a subtotal.
    pub fn breakdown(&self, subtotal: Money) -> Result<PriceBreakdown, CommerceError> {
        let shipping = self.shipping_for(&subtotal);
        let tax = self.tax_for(&subtotal);
        let total = subtotal
            .try_add(&shipping)
            .and_then(|m| m.try_add(&tax))
            .ok_or(CommerceError::Overflow)?;

        Ok(PriceBreakdown {
            subtotal,
            shipping,
            tax,
            total,
            free_shipping_remaining: subtotal.shortfall_to(&self.free_shipping_threshold),
        })
    }

    /// Breakdown for the cart's current contents.
    pub fn price_cart(&self, cart: &Cart) -> Result<PriceBreakdown, CommerceError> {
        self.breakdown(cart.total_price()?)
    }
}

/// Complete pricing breakdown for an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub total: Money,
    /// How much more to spend for free shipping; zero once reached.
    pub free_shipping_remaining: Money,
}

impl PriceBreakdown {
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(units: i64) -> Money {
        Money::from_units(units, Currency::USD)
    }

    #[test]
    fn test_below_threshold() {
        let b = PricingPolicy::default().breakdown(dollars(4000)).unwrap();
        assert_eq!(b.shipping, dollars(250));
        assert_eq!(b.tax, dollars(320));
        assert_eq!(b.total, dollars(4570));
        assert_eq!(b.free_shipping_remaining, dollars(1000));
        assert!(!b.has_free_shipping());
    }

    #[test]
    fn test_at_threshold() {
        let b = PricingPolicy::default().breakdown(dollars(5000)).unwrap();
        assert_eq!(b.shipping, dollars(0));
        assert_eq!(b.tax, dollars(400));
        assert_eq!(b.total, dollars(5400));
        assert!(b.free_shipping_remaining.is_zero());
    }

    #[test]
    fn test_empty_subtotal_still_ships() {
        let b = PricingPolicy::default().breakdown(dollars(0)).unwrap();
        assert_eq!(b.shipping, dollars(250));
        assert_eq!(b.total, dollars(250));
    }

    #[test]
    fn test_tax_rounds_half_up() {
        let policy = PricingPolicy::default();
        // 8% of $0.06 is 0.48 cents.
        assert_eq!(policy.tax_for(&Money::usd(6)).amount_cents, 0);
        // 8% of $0.07 is 0.56 cents.
        assert_eq!(policy.tax_for(&Money::usd(7)).amount_cents, 1);
        // 8% of $899.99 is 71.9992.
        assert_eq!(policy.tax_for(&Money::usd(89_999)).amount_cents, 7200);
    }

    #[test]
    fn test_custom_policy() {
        let policy = PricingPolicy::new(dollars(100), dollars(15), 7.25).unwrap();
        assert_eq!(policy.tax_rate_bps, 725);
        let b = policy.breakdown(dollars(100)).unwrap();
        assert!(b.has_free_shipping());
        assert_eq!(b.tax, Money::usd(725));

        assert!(PricingPolicy::new(dollars(100), dollars(15), -1.0).is_err());
        assert!(PricingPolicy::new(dollars(100), dollars(-15), 8.0).is_err());
    }
}
