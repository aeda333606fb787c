//! Storage-specific error types.
//!
//! These errors come from the store itself, separate from the field format
//! rules checked before anything reaches it.

/// Errors that can occur during user store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Insert refused because a user with the same username (ignoring case) exists.
    #[error("User '{username}' already exists in store")]
    DuplicateUsername { username: String },
}

impl StorageError {
    /// Create a duplicate username error.
    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
        }
    }
}
