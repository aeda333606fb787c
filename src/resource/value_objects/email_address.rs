//! EmailAddress value object.
//!
//! This module provides a type-safe wrapper around email addresses with built-in
//! validation. Only the address syntax is checked; nothing is ever sent.

use crate::config::RegistrationConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::validation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated, lower-cased email address.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Must follow addr-spec grammar: `local-part@domain`
/// - The domain must contain at least one dot
/// - Case is ignored; the stored value is lower-cased
///
/// ## Examples
///
/// ```rust
/// use user_registration::resource::value_objects::EmailAddress;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let email = EmailAddress::new("EmAiL@hOtMaIl.CoM".to_string())?;
///     assert_eq!(email.as_str(), "email@hotmail.com");
///     assert_eq!(email.domain(), "hotmail.com");
///
///     assert!(EmailAddress::new("userexample,com".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress validated against the default rules.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::with_config(value, &RegistrationConfig::default())
    }

    /// Create a new EmailAddress validated against `config`.
    pub fn with_config(value: String, config: &RegistrationConfig) -> ValidationResult<Self> {
        let normalized = validation::normalize_email(&value, config)?;
        Ok(Self(normalized))
    }

    /// Get the normalized address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned normalized address.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Part before the final `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// Part after the final `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        self.0.rsplit_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
