//! Demo admin login.
//!
//! A plain flag behind a fixed credential pair. Not an access control
//! mechanism.

use crate::error::CommerceError;
use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "cryotech2024";

/// The credential pair a login is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must match exactly.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        // Evaluate both so a wrong username costs the same as a wrong password.
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok & pass_ok
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }
}

/// Admin login state, persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a login attempt.
    ///
    /// Empty fields are a validation error; a mismatch is a generic
    /// `InvalidCredentials` that does not say which field was wrong. A
    /// failed attempt leaves the current state untouched.
    pub fn login(
        &mut self,
        credentials: &AdminCredentials,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<(), CommerceError> {
        let mut errors = ValidationErrors::new();
        errors.require_min_chars("username", username, 1, "Username is required");
        errors.require_min_chars("password", password, 1, "Password is required");
        errors.into_result()?;

        if !credentials.matches(username, password) {
            warn!(username, "admin login rejected");
            return Err(CommerceError::InvalidCredentials);
        }

        self.is_authenticated = true;
        self.username = Some(username.to_string());
        self.logged_in_at = Some(now);
        info!(username, "admin logged in");
        Ok(())
    }

    pub fn logout(&mut self) {
        if self.is_authenticated {
            info!(username = self.username.as_deref().unwrap_or_default(), "admin logged out");
        }
        *self = Self::default();
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// `Err(InvalidCredentials)` unless logged in.
    pub fn require(&self) -> Result<(), CommerceError> {
        if self.is_authenticated {
            Ok(())
        } else {
            Err(CommerceError::InvalidCredentials)
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
