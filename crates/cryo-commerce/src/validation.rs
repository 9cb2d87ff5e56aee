//! Field-level validation for the checkout, contact and admin forms.
//!
//! Every rule is checked and every failure is collected, so callers can
//! show each message next to the field it belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field name, e.g. `shipping_street`.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

/// All validation failures for one form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. A field keeps only its first message.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.get(&field).is_none() {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    /// Fold another form's failures in, prefixing their field names.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationErrors) {
        for e in other.errors {
            self.add(format!("{prefix}{}", e.field), e.message);
        }
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Require at least `min` characters after trimming.
    pub fn require_min_chars(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.trim().chars().count() < min {
            self.add(field, message);
        }
    }

    /// Require a syntactically plausible email address.
    pub fn require_email(&mut self, field: &str, value: &str) {
        if Email::parse(value).is_err() {
            self.add(field, "Please enter a valid email address");
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    #[error("email must not contain whitespace")]
    Whitespace,
    #[error("email must contain exactly one @ symbol")]
    AtSymbol,
    #[error("email local part cannot be empty")]
    EmptyLocalPart,
    #[error("email domain must contain a dot between non-empty labels")]
    InvalidDomain,
}

/// An email address with basic structural validation.
///
/// ```
/// use cryo_commerce::validation::Email;
///
/// assert!(Email::parse("ops@cryolab.example").is_ok());
/// assert!(Email::parse("ops@localhost").is_err());
/// assert!(Email::parse("@cryolab.example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(EmailError::Whitespace);
        }

        let (local, domain) = s.split_once('@').ok_or(EmailError::AtSymbol)?;
        if domain.contains('@') {
            return Err(EmailError::AtSymbol);
        }
        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(EmailError::InvalidDomain);
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_failure() {
        let mut errors = ValidationErrors::new();
        errors.require_min_chars("first_name", "J", 2, "too short");
        errors.require_email("email", "not-an-email");
        errors.require_min_chars("city", "Boston", 2, "too short");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("first_name"), Some("too short"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert!(errors.get("city").is_none());
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("phone", "first");
        errors.add("phone", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("phone"), Some("first"));
    }

    #[test]
    fn test_min_chars_trims_whitespace() {
        let mut errors = ValidationErrors::new();
        errors.require_min_chars("name", "  a  ", 2, "too short");
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_merge_prefixed() {
        let mut inner = ValidationErrors::new();
        inner.add("street", "Street address is required");
        let mut outer = ValidationErrors::new();
        outer.merge_prefixed("billing_", inner);
        assert_eq!(outer.get("billing_street"), Some("Street address is required"));
    }

    #[test]
    fn test_email_rules() {
        assert!(Email::parse("buyer@acme.example").is_ok());
        assert!(Email::parse("first.last+tag@lab.co.uk").is_ok());
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("no-at-symbol"), Err(EmailError::AtSymbol));
        assert_eq!(Email::parse("a@b@c.com"), Err(EmailError::AtSymbol));
        assert_eq!(Email::parse("@acme.example"), Err(EmailError::EmptyLocalPart));
        assert_eq!(Email::parse("user@acme"), Err(EmailError::InvalidDomain));
        assert_eq!(Email::parse("user@acme."), Err(EmailError::InvalidDomain));
        assert_eq!(Email::parse("us er@acme.com"), Err(EmailError::Whitespace));
    }
}
