//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart: at most one line per product, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in the order they were first added.
    #[serde(default)]
    pub items: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product.
    ///
    /// Increments the existing line for the product, or appends a new one.
    /// Returns the line's new quantity.
    ///
    /// Returns an error if:
    /// - Quantity is zero
    /// - The line quantity would overflow
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<u32, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }

        if let Some(existing) = self.items.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            debug!(product = %product.id, quantity = existing.quantity, "cart line incremented");
            return Ok(existing.quantity);
        }

        self.items.push(CartLine::new(product.clone(), quantity));
        debug!(product = %product.id, quantity, "cart line added");
        Ok(quantity)
    }

    /// Remove a product's line. Returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|l| &l.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(product = %product_id, "cart line removed");
        }
        removed
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line. Returns whether a line
    /// was changed or removed; an unknown product is a no-op.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(product_id));
        }

        let quantity = u32::try_from(quantity).map_err(|_| CommerceError::InvalidQuantity(quantity))?;

        match self.items.iter_mut().find(|l| &l.product.id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                debug!(product = %product_id, quantity, "cart line quantity set");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
    }

    /// Sum of line quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        self.items.iter().try_fold(Money::zero(self.currency()), |acc, line| {
            let line_total = line.total()?;
            acc.try_add(&line_total).ok_or(CommerceError::Overflow)
        })
    }

    /// Currency of the first line, USD for an empty cart.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|l| l.product.price.currency)
            .unwrap_or_default()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.product.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }
}

/// One product and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product snapshot taken when the line was created.
    pub product: Product,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Product {
        Catalog::builtin().get(&ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().unwrap(), Money::usd(0));
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_item(&product("4"), 2).unwrap(), 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let valve = product("4");
        cart.add_item(&valve, 1).unwrap();
        assert_eq!(cart.add_item(&valve, 2).unwrap(), 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&valve.id).unwrap().quantity, 3);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&product("5"), 1).unwrap();
        cart.add_item(&product("1"), 1).unwrap();
        cart.add_item(&product("5"), 1).unwrap();
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["5", "1"]);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_item(&product("4"), 0).unwrap_err(),
            CommerceError::InvalidQuantity(0)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets() {
        let mut cart = Cart::new();
        let valve = product("4");
        cart.add_item(&valve, 3).unwrap();
        assert!(cart.update_quantity(&valve.id, 5).unwrap());
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_to_zero_removes() {
        let mut cart = Cart::new();
        let valve = product("4");
        cart.add_item(&valve, 3).unwrap();
        assert!(cart.update_quantity(&valve.id, 0).unwrap());
        assert!(cart.get(&valve.id).is_none());

        cart.add_item(&valve, 1).unwrap();
        cart.update_quantity(&valve.id, -4).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product("4"), 1).unwrap();
        assert!(!cart.update_quantity(&ProductId::new("99"), 7).unwrap());
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let valve = product("4");
        cart.add_item(&valve, 1).unwrap();
        assert!(cart.remove_item(&valve.id));
        assert!(!cart.remove_item(&valve.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price() {
        let mut cart = Cart::new();
        cart.add_item(&product("4"), 2).unwrap(); // 2 x 899.99
        cart.add_item(&product("8"), 1).unwrap(); // 799.99
        assert_eq!(cart.total_price().unwrap(), Money::usd(259_997));
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut cart = Cart::new();
        let mut expensive = product("2");
        expensive.price = Money::usd(i64::MAX / 2);
        cart.add_item(&expensive, 3).unwrap();
        assert_eq!(cart.total_price().unwrap_err(), CommerceError::Overflow);

        let valve = product("4");
        cart.add_item(&valve, u32::MAX).unwrap();
        assert_eq!(cart.add_item(&valve, 1).unwrap_err(), CommerceError::Overflow);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product("1"), 1).unwrap();
        cart.add_item(&product("2"), 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }
}
