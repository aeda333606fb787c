//! Shared handle for registering users from concurrent tasks.
//!
//! The handle wraps one [`RegistrationService`] in an `Arc<RwLock<..>>`.
//! Registration holds the write lock for the whole validate, duplicate check
//! and insert sequence, so two tasks registering the same username under
//! different casings cannot both succeed. Read-only queries share the read lock.

use super::core::RegistrationService;
use super::outcome::RegistrationOutcome;
use crate::error::RegistrationResult;
use crate::resource::User;
use crate::storage::{InMemoryUserStore, UserStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable, task-safe handle to a registration service.
///
/// # Examples
///
/// ```rust
/// use user_registration::SharedRegistrationService;
///
/// # async fn example() {
/// let service = SharedRegistrationService::new();
/// let other = service.clone();
///
/// assert!(service.register_user("testuser", "password123!", "testuser@example.com").await);
/// assert!(other.is_registered("TESTUSER").await);
/// # }
/// ```
#[derive(Debug)]
pub struct SharedRegistrationService<S = InMemoryUserStore> {
    inner: Arc<RwLock<RegistrationService<S>>>,
}

impl<S> Clone for SharedRegistrationService<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedRegistrationService<InMemoryUserStore> {
    /// Create a shared handle over a default service.
    pub fn new() -> Self {
        Self::from(RegistrationService::new())
    }
}

impl Default for SharedRegistrationService<InMemoryUserStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> From<RegistrationService<S>> for SharedRegistrationService<S> {
    fn from(service: RegistrationService<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }
}

impl<S: UserStore> SharedRegistrationService<S> {
    /// See [`RegistrationService::register_user`].
    pub async fn register_user(&self, username: &str, password: &str, email: &str) -> bool {
        self.inner
            .write()
            .await
            .register_user(username, password, email)
    }

    /// See [`RegistrationService::try_register_user`].
    pub async fn try_register_user(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> RegistrationResult<User> {
        self.inner
            .write()
            .await
            .try_register_user(username, password, email)
    }

    /// See [`RegistrationService::register_user_with_outcome`].
    pub async fn register_user_with_outcome(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> RegistrationOutcome {
        self.inner
            .write()
            .await
            .register_user_with_outcome(username, password, email)
    }

    /// See [`RegistrationService::validate_username`].
    pub async fn validate_username(&self, username: &str) -> bool {
        self.inner.read().await.validate_username(username)
    }

    /// See [`RegistrationService::validate_password`].
    pub async fn validate_password(&self, password: &str) -> bool {
        self.inner.read().await.validate_password(password)
    }

    /// See [`RegistrationService::validate_email`].
    pub async fn validate_email(&self, email: &str) -> bool {
        self.inner.read().await.validate_email(email)
    }

    /// Whether the username is registered, ignoring case.
    pub async fn is_registered(&self, username: &str) -> bool {
        self.inner.read().await.is_registered(username)
    }

    /// Clone of a registered user, ignoring case.
    pub async fn find_user(&self, username: &str) -> Option<User> {
        self.inner.read().await.find_user(username).cloned()
    }

    /// Number of registered users.
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.user_count()
    }

    /// See [`RegistrationService::get_registration_confirmation_message`].
    pub async fn get_registration_confirmation_message(&self, username: &str) -> String {
        self.inner
            .read()
            .await
            .get_registration_confirmation_message(username)
    }
}
