//! Commerce error types.

use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Unparseable monetary amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Unknown product category tag.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown sort key.
    #[error("Unknown sort option: {0}")]
    UnknownSort(String),

    /// Unknown order status.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// One or more form fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Admin login rejected.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl From<ValidationErrors> for CommerceError {
    fn from(errors: ValidationErrors) -> Self {
        CommerceError::Validation(errors)
    }
}
