//! Storage abstraction for registered users.
//!
//! The `UserStore` trait keeps the registration service independent of how users
//! are held. A store is responsible for:
//! - Keeping registered users for the lifetime of the process
//! - Looking users up by username, ignoring case
//! - Refusing to hold two users whose usernames differ only by case
//!
//! It is NOT responsible for field format rules; those run before a [`User`]
//! can even be constructed.
//!
//! # Example Usage
//!
//! ```rust
//! use user_registration::resource::{EmailAddress, Password, User, UserName};
//! use user_registration::storage::{InMemoryUserStore, UserStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = InMemoryUserStore::new();
//! let user = User::new(
//!     UserName::try_from("testuser")?,
//!     Password::try_from("password123!")?,
//!     EmailAddress::try_from("testuser@example.com")?,
//! );
//! store.insert(user)?;
//!
//! assert!(store.contains_username("TESTUSER"));
//! assert_eq!(store.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StorageError;
pub use in_memory::InMemoryUserStore;

use crate::resource::User;

/// Process-memory collection of registered users.
///
/// Implementations must compare usernames case-insensitively in both
/// [`contains_username`](UserStore::contains_username) and
/// [`insert`](UserStore::insert).
pub trait UserStore: Send + Sync {
    /// Whether a user with this username exists, ignoring case.
    fn contains_username(&self, username: &str) -> bool;

    /// Add a user.
    ///
    /// # Errors
    /// [`StorageError::DuplicateUsername`] if the username is already present.
    fn insert(&mut self, user: User) -> Result<(), StorageError>;

    /// Look up a user by username, ignoring case.
    fn get(&self, username: &str) -> Option<&User>;

    /// All users in insertion order.
    fn users(&self) -> Box<dyn Iterator<Item = &User> + '_>;

    /// Number of registered users.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
