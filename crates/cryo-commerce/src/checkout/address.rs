//! Customer and address records.

use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};

/// Country pre-filled on a fresh address.
pub const DEFAULT_COUNTRY: &str = "United States";

/// Who is placing the order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl CustomerInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Collect every failing field.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require_min_chars(
            "first_name",
            &self.first_name,
            2,
            "First name must be at least 2 characters",
        );
        errors.require_min_chars(
            "last_name",
            &self.last_name,
            2,
            "Last name must be at least 2 characters",
        );
        errors.require_email("email", &self.email);
        errors.require_min_chars("phone", &self.phone, 10, "Please enter a valid phone number");
        errors
    }
}

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    /// State or province.
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
            country: country.into(),
        }
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }

    /// Collect every failing field. Field names are unprefixed.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require_min_chars("street", &self.street, 5, "Street address is required");
        errors.require_min_chars("city", &self.city, 2, "City is required");
        errors.require_min_chars("state", &self.state, 2, "State is required");
        errors.require_min_chars("zip_code", &self.zip_code, 5, "ZIP code is required");
        errors.require_min_chars("country", &self.country, 2, "Country is required");
        errors
    }
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}
