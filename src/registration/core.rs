//! Core registration service structure and initialization.
//!
//! This module contains the RegistrationService struct definition, its
//! constructors and read-only queries over the registered users.

use crate::config::RegistrationConfig;
use crate::error::ConfigResult;
use crate::resource::User;
use crate::storage::{InMemoryUserStore, UserStore};

/// Validates and registers users held in process memory.
///
/// The service owns its store exclusively. Registration takes `&mut self`,
/// so the duplicate check and the insert can never interleave with another
/// registration on the same instance. Use
/// [`SharedRegistrationService`](super::SharedRegistrationService) to share one
/// instance between tasks.
///
/// # Type Parameters
///
/// * `S` - The user store type that implements [`UserStore`]
///
/// # Examples
///
/// ```rust
/// use user_registration::RegistrationService;
///
/// let mut service = RegistrationService::new();
///
/// assert!(service.register_user("testuser", "password123!", "testuser@example.com"));
/// assert!(!service.register_user("TestUser", "password456!", "other@example.com"));
/// assert_eq!(
///     service.get_registration_confirmation_message("testuser"),
///     "User 'testuser' has been successfully registered."
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationService<S = InMemoryUserStore> {
    pub(super) store: S,
    pub(super) config: RegistrationConfig,
}

impl RegistrationService<InMemoryUserStore> {
    /// Creates a service with the default rules and an empty in-memory store.
    pub fn new() -> Self {
        Self {
            store: InMemoryUserStore::new(),
            config: RegistrationConfig::default(),
        }
    }
}

impl Default for RegistrationService<InMemoryUserStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UserStore> RegistrationService<S> {
    /// Creates a service over `store` with the given rule configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) if `config` fails validation.
    pub fn with_store_and_config(store: S, config: RegistrationConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// The rules this service validates against.
    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether `username` is registered, ignoring case.
    pub fn is_registered(&self, username: &str) -> bool {
        self.store.contains_username(username)
    }

    /// Look up a registered user, ignoring case.
    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.store.get(username)
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.store.len()
    }

    /// Registered users in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.store.users()
    }
}
