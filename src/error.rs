//! Error types for user registration.
//!
//! Registration through the boolean API never surfaces these; they back the
//! reason-reporting variants (`try_register_user`, `check_*`) and configuration
//! loading.

pub use crate::storage::StorageError;

/// Main error type for registration operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// One of the submitted fields failed its format rule
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The username is already registered (compared case-insensitively)
    #[error("Username '{username}' is already registered")]
    DuplicateUsername { username: String },

    /// Errors from the backing user store
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Field-level validation errors.
///
/// Each variant names the first rule a value violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Username is empty
    #[error("Username must not be empty")]
    EmptyUsername,

    /// Username length is outside the allowed range
    #[error("Username must be between {min} and {max} characters, got {length}")]
    UsernameLength { length: usize, min: usize, max: usize },

    /// Username contains a character that is neither a letter nor a digit
    #[error("Username contains invalid character '{character}'")]
    UsernameCharacter { character: char },

    /// Password is shorter than the minimum length
    #[error("Password must be at least {min} characters, got {length}")]
    PasswordTooShort { length: usize, min: usize },

    /// Password has no character from the special character set
    #[error("Password must contain at least one special character")]
    PasswordMissingSpecialCharacter,

    /// Email is empty
    #[error("Email address must not be empty")]
    EmptyEmail,

    /// Email exceeds the maximum address length
    #[error("Email address must be at most {max} characters, got {length}")]
    EmailTooLong { length: usize, max: usize },

    /// Email does not follow addr-spec grammar
    #[error("Invalid email address format: '{email}'")]
    InvalidEmailFormat { email: String },
}

/// Errors in a [`RegistrationConfig`](crate::config::RegistrationConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A length bound is zero or the minimum exceeds the maximum
    #[error("Invalid {field} length bounds: min {min}, max {max}")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    /// The password special character set is empty
    #[error("Password special character set must not be empty")]
    EmptySpecialCharacters,
}

// Convenience methods for creating common errors
impl RegistrationError {
    /// Create a duplicate username error
    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
        }
    }

    /// Whether this error came from a field format rule.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this error means the username is taken.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateUsername { .. } | Self::Storage(StorageError::DuplicateUsername { .. })
        )
    }
}

impl ValidationError {
    /// Create an invalid email format error
    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmailFormat {
            email: email.into(),
        }
    }

    /// Name of the field this error concerns.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyUsername | Self::UsernameLength { .. } | Self::UsernameCharacter { .. } => {
                "username"
            }
            Self::PasswordTooShort { .. } | Self::PasswordMissingSpecialCharacter => "password",
            Self::EmptyEmail | Self::EmailTooLong { .. } | Self::InvalidEmailFormat { .. } => {
                "email"
            }
        }
    }
}

impl ConfigError {
    /// Create an invalid length bounds error
    pub fn invalid_length(field: impl Into<String>, min: usize, max: usize) -> Self {
        Self::InvalidLength {
            field: field.into(),
            min,
            max,
        }
    }
}

// Result type aliases for convenience
pub type RegistrationResult<T> = Result<T, RegistrationError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
