//! Registration rule configuration.
//!
//! The defaults reproduce the standard registration rules exactly: usernames of
//! 5 to 20 letters or digits, passwords of at least 8 characters with one
//! special character, and email addresses up to 254 characters.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Default special characters a password must draw at least one from.
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_+=[]{}|;:,.<>?";

/// Limits and character sets applied by the validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Minimum username length in characters (inclusive).
    pub username_min_length: usize,

    /// Maximum username length in characters (inclusive).
    pub username_max_length: usize,

    /// Minimum password length in characters.
    pub password_min_length: usize,

    /// Characters that satisfy the password special character rule.
    pub password_special_characters: String,

    /// Maximum email address length in characters.
    pub email_max_length: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            username_min_length: 5,
            username_max_length: 20,
            password_min_length: 8,
            password_special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            email_max_length: 254,
        }
    }
}

impl RegistrationConfig {
    /// Parse a configuration from JSON and validate it.
    ///
    /// Fields missing from the document keep their default values.
    ///
    /// ```rust
    /// use user_registration::RegistrationConfig;
    ///
    /// let config = RegistrationConfig::from_json_str(r#"{"username_max_length": 32}"#).unwrap();
    /// assert_eq!(config.username_min_length, 5);
    /// assert_eq!(config.username_max_length, 32);
    /// ```
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.username_min_length == 0 || self.username_min_length > self.username_max_length {
            return Err(ConfigError::invalid_length(
                "username",
                self.username_min_length,
                self.username_max_length,
            ));
        }

        if self.password_min_length == 0 {
            return Err(ConfigError::invalid_length(
                "password",
                self.password_min_length,
                usize::MAX,
            ));
        }

        if self.email_max_length == 0 {
            return Err(ConfigError::invalid_length("email", 1, self.email_max_length));
        }

        if self.password_special_characters.is_empty() {
            return Err(ConfigError::EmptySpecialCharacters);
        }

        Ok(())
    }

    /// Whether `c` belongs to the password special character set.
    pub fn is_special_character(&self, c: char) -> bool {
        self.password_special_characters.contains(c)
    }
}
