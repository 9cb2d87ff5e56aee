//! Contact and quote requests.
//!
//! Submissions never leave the process; a receipt with a reference number
//! stands in for delivery.

use crate::error::CommerceError;
use crate::ids::ContactReference;
use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// What the enquiry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    General,
    Quote,
    Technical,
    Warranty,
    Partnership,
    Other,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 6] = [
        ContactCategory::General,
        ContactCategory::Quote,
        ContactCategory::Technical,
        ContactCategory::Warranty,
        ContactCategory::Partnership,
        ContactCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactCategory::General => "general",
            ContactCategory::Quote => "quote",
            ContactCategory::Technical => "technical",
            ContactCategory::Warranty => "warranty",
            ContactCategory::Partnership => "partnership",
            ContactCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactCategory::General => "General Inquiry",
            ContactCategory::Quote => "Request a Quote",
            ContactCategory::Technical => "Technical Support",
            ContactCategory::Warranty => "Warranty & Service",
            ContactCategory::Partnership => "Partnership Opportunities",
            ContactCategory::Other => "Other",
        }
    }
}

impl FromStr for ContactCategory {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ContactCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted contact form.
///
/// `category` stays a raw tag so an unknown value is reported as a field
/// error alongside the others instead of failing early.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub phone: String,
    pub subject: String,
    pub category: String,
    pub message: String,
}

impl ContactRequest {
    /// Collect every failing field.
    pub fn validate(&self) -> Result<ContactCategory, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_min_chars("name", &self.name, 2, "Name must be at least 2 characters");
        errors.require_email("email", &self.email);
        errors.require_min_chars("phone", &self.phone, 10, "Please enter a valid phone number");
        errors.require_min_chars(
            "subject",
            &self.subject,
            5,
            "Subject must be at least 5 characters",
        );
        let category = self.category.parse::<ContactCategory>().ok();
        if category.is_none() {
            errors.add("category", "Please select a category");
        }
        errors.require_min_chars(
            "message",
            &self.message,
            20,
            "Message must be at least 20 characters",
        );

        match category {
            Some(category) if errors.is_empty() => Ok(category),
            _ => Err(errors),
        }
    }
}

/// Acknowledgement for an accepted request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactReceipt {
    pub reference: ContactReference,
    pub category: ContactCategory,
    pub subject: String,
    pub received_at: DateTime<Utc>,
}

/// Validate and accept a contact request.
pub fn submit_contact(
    request: &ContactRequest,
    now: DateTime<Utc>,
) -> Result<ContactReceipt, CommerceError> {
    let category = request.validate()?;
    let receipt = ContactReceipt {
        reference: ContactReference::at(now),
        category,
        subject: request.subject.trim().to_string(),
        received_at: now,
    };
    info!(reference = %receipt.reference, category = %category, "contact request received");
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Grace Hopper".into(),
            email: "grace@navy.example".into(),
            company: None,
            phone: "(202) 555-0142".into(),
            subject: "Bulk LNG quote".into(),
            category: "quote".into(),
            message: "We need pricing for three 10,000L tanks.".into(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(request().validate().unwrap(), ContactCategory::Quote);
    }

    #[test]
    fn test_collects_every_failure() {
        let req = ContactRequest {
            category: "sales".into(),
            message: "too short".into(),
            subject: "Hi".into(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.get("category").is_some());
        assert!(errors.get("message").is_some());
        assert!(errors.get("subject").is_some());
    }

    #[test]
    fn test_short_phone_message() {
        let req = ContactRequest {
            phone: "555-0142".into(),
            ..request()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number"));
    }

    #[test]
    fn test_submit_returns_receipt() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let receipt = submit_contact(&request(), now).unwrap();
        assert_eq!(receipt.reference.as_str(), "CT-1705314600000");
        assert_eq!(receipt.category, ContactCategory::Quote);
    }

    #[test]
    fn test_submit_rejects_invalid() {
        let now = Utc::now();
        let req = ContactRequest {
            email: "grace".into(),
            ..request()
        };
        assert!(matches!(
            submit_contact(&req, now),
            Err(CommerceError::Validation(_))
        ));
    }
}
