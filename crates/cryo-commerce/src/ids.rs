//! Newtype IDs for type-safe identifiers.
//!
//! Keeps a product identifier from being passed where an order number is
//! expected, even though both are plain strings on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Catalog product identifier.
    ProductId
);
define_id!(
    /// Customer-facing order number, e.g. `CO-1705312200000`.
    OrderNumber
);
define_id!(
    /// Reference handed back after a contact request.
    ContactReference
);

impl OrderNumber {
    /// Order numbers are the submission time in Unix milliseconds.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(format!("CO-{}", now.timestamp_millis()))
    }
}

impl ContactReference {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(format!("CT-{}", now.timestamp_millis()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("1");
        assert_eq!(id.as_str(), "1");
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "8".into();
        assert_eq!(id, ProductId::new("8"));
    }

    #[test]
    fn test_order_number_from_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let number = OrderNumber::at(now);
        assert_eq!(number.as_str(), "CO-1705314600000");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new("3")).unwrap();
        assert_eq!(json, "\"3\"");
    }
}
