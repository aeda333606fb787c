//! Password value object.
//!
//! Passwords are kept in plaintext exactly as submitted. This type only
//! enforces the format rules; it is not a credential storage design.

use crate::config::RegistrationConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::validation;
use std::fmt;

/// A password that satisfies the length and special character rules.
///
/// `Debug` output never includes the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Create a new Password validated against the default rules.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::with_config(value, &RegistrationConfig::default())
    }

    /// Create a new Password validated against `config`.
    pub fn with_config(value: String, config: &RegistrationConfig) -> ValidationResult<Self> {
        validation::check_password(&value, config)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl TryFrom<String> for Password {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Password {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
