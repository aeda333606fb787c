//! UserName value object for registration identifiers.
//!
//! This module provides a type-safe wrapper around user names with built-in validation.
//! User names are the registration key: they must be unique among registered users,
//! compared without regard to case.

use crate::config::RegistrationConfig;
use crate::error::{ValidationError, ValidationResult};
use crate::validation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated user name.
///
/// UserName enforces the username rules at construction time, ensuring that
/// only valid user names can exist in the system. The original spelling is
/// kept; [`UserName::normalized`] gives the form used for duplicate checks.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Length between the configured bounds (5 to 20 characters by default)
/// - Letters and digits only, including non-ASCII letters
///
/// ## Examples
///
/// ```rust
/// use user_registration::resource::value_objects::UserName;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let username = UserName::new("testuser".to_string())?;
///     println!("User name: {}", username.as_str());
///
///     // Invalid user name - returns ValidationError
///     let invalid = UserName::new("".to_string());
///     assert!(invalid.is_err());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName validated against the default rules.
    ///
    /// # Returns
    ///
    /// * `Ok(UserName)` - If the value is valid
    /// * `Err(ValidationError)` - If the value violates validation rules
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::with_config(value, &RegistrationConfig::default())
    }

    /// Create a new UserName validated against `config`.
    pub fn with_config(value: String, config: &RegistrationConfig) -> ValidationResult<Self> {
        validation::check_username(&value, config)?;
        Ok(Self(value))
    }

    /// Get the string representation of the UserName.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the UserName.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Lower-cased form used to compare user names case-insensitively.
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }

    /// Whether `other` names the same user, ignoring case.
    pub fn matches(&self, other: &str) -> bool {
        self.normalized() == normalize(other)
    }
}

/// Lower-case a raw username for duplicate comparison.
pub(crate) fn normalize(value: &str) -> String {
    value.to_lowercase()
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for UserName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for UserName {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
