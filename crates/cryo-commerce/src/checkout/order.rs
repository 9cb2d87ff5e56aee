//! Orders and order placement.

use crate::cart::{Cart, PriceBreakdown, PricingPolicy};
use crate::checkout::{Address, CheckoutForm, CustomerInfo};
use crate::error::CommerceError;
use crate::ids::{OrderNumber, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == key)
            .ok_or_else(|| CommerceError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_number: OrderNumber,
    pub status: OrderStatus,
    /// Cart lines at the moment of placement.
    pub lines: Vec<OrderLine>,
    pub pricing: PriceBreakdown,
    pub customer: CustomerInfo,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Get total item count.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total(&self) -> Money {
        self.pricing.total
    }
}

/// A line in an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    /// Product name at time of order.
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Place an order with the standard shipping and tax rules.
pub fn place_order(
    cart: &Cart,
    form: &CheckoutForm,
    now: DateTime<Utc>,
) -> Result<Order, CommerceError> {
    place_order_with(cart, form, &PricingPolicy::default(), now)
}

/// Validate the form and snapshot the cart into a pending order.
///
/// Returns an error if:
/// - The cart is empty
/// - Any form field fails validation
/// - Pricing overflows
pub fn place_order_with(
    cart: &Cart,
    form: &CheckoutForm,
    policy: &PricingPolicy,
    now: DateTime<Utc>,
) -> Result<Order, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }
    form.validate()?;

    let lines = cart
        .lines()
        .iter()
        .map(|line| -> Result<OrderLine, CommerceError> {
            Ok(OrderLine {
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                unit_price: line.product.price,
                quantity: line.quantity,
                line_total: line.total()?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pricing = policy.price_cart(cart)?;
    let order = Order {
        order_number: OrderNumber::at(now),
        status: OrderStatus::Pending,
        lines,
        pricing,
        customer: form.customer.clone(),
        shipping_address: form.shipping_address.clone(),
        billing_address: form.effective_billing().clone(),
        created_at: now,
    };

    info!(
        order = %order.order_number,
        items = order.item_count(),
        total = %order.pricing.total,
        "order placed"
    );
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::checkout::form::tests::valid_form;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    fn cart_with(ids: &[(&str, u32)]) -> Cart {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        for (id, qty) in ids {
            cart.add_item(catalog.get(&ProductId::new(*id)).unwrap(), *qty)
                .unwrap();
        }
        cart
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Shipped".parse::<OrderStatus>().unwrap(), OrderStatus::Shipped);
        assert!("lost".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_place_order() {
        let cart = cart_with(&[("4", 2), ("8", 1)]);
        let order = place_order(&cart, &valid_form(), now()).unwrap();

        assert_eq!(order.order_number.as_str(), "CO-1705314600000");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.lines[0].line_total, Money::usd(179_998));
        assert_eq!(order.pricing.subtotal, Money::usd(259_997));
        assert_eq!(order.pricing.shipping, Money::usd(25_000));
        assert_eq!(order.billing_address, order.shipping_address);
    }

    #[test]
    fn test_large_order_ships_free() {
        let cart = cart_with(&[("1", 2)]);
        let order = place_order(&cart, &valid_form(), now()).unwrap();
        assert!(order.pricing.has_free_shipping());
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = place_order(&Cart::new(), &valid_form(), now()).unwrap_err();
        assert_eq!(err, CommerceError::EmptyCart);
    }

    #[test]
    fn test_invalid_form_rejected() {
        let cart = cart_with(&[("4", 1)]);
        let mut form = valid_form();
        form.customer.email = "nope".into();
        form.accept_terms = false;
        match place_order(&cart, &form, now()).unwrap_err() {
            CommerceError::Validation(errors) => {
                assert!(errors.get("email").is_some());
                assert!(errors.get("accept_terms").is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
