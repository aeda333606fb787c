//! Registration outcome as a plain value.

use crate::error::{RegistrationError, RegistrationResult};
use std::fmt;

/// What happened to a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationOutcome {
    /// The user was stored.
    Registered,
    /// The username broke the length or character rule.
    InvalidUsername,
    /// The password broke the length or special character rule.
    InvalidPassword,
    /// The email address is not a valid address.
    InvalidEmail,
    /// The username is already registered, ignoring case.
    DuplicateUsername,
}

impl RegistrationOutcome {
    /// Whether the user was stored.
    pub fn is_registered(self) -> bool {
        self == Self::Registered
    }
}

impl From<&RegistrationError> for RegistrationOutcome {
    fn from(error: &RegistrationError) -> Self {
        match error {
            RegistrationError::Validation(e) => match e.field() {
                "username" => Self::InvalidUsername,
                "password" => Self::InvalidPassword,
                _ => Self::InvalidEmail,
            },
            RegistrationError::DuplicateUsername { .. } | RegistrationError::Storage(_) => {
                Self::DuplicateUsername
            }
        }
    }
}

impl<T> From<&RegistrationResult<T>> for RegistrationOutcome {
    fn from(result: &RegistrationResult<T>) -> Self {
        match result {
            Ok(_) => Self::Registered,
            Err(e) => Self::from(e),
        }
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Registered => "registered",
            Self::InvalidUsername => "invalid username",
            Self::InvalidPassword => "invalid password",
            Self::InvalidEmail => "invalid email",
            Self::DuplicateUsername => "duplicate username",
        };
        f.write_str(text)
    }
}
