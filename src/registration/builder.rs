//! Builder pattern for configuring registration service instances.
//!
//! The builder starts from the default rules and lets callers adjust length
//! limits and the password special character set before the configuration is
//! validated once in [`build`](RegistrationServiceBuilder::build).

use crate::config::RegistrationConfig;
use crate::error::ConfigResult;
use crate::registration::RegistrationService;
use crate::storage::UserStore;

/// Builder for configuring and creating registration services.
///
/// # Examples
///
/// ```rust
/// use user_registration::RegistrationServiceBuilder;
/// use user_registration::storage::InMemoryUserStore;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut service = RegistrationServiceBuilder::new(InMemoryUserStore::new())
///     .with_username_length(3, 32)
///     .with_password_min_length(12)
///     .build()?;
///
/// assert!(service.validate_username("bob"));
/// assert!(!service.validate_password("short!pass"));
/// # Ok(())
/// # }
/// ```
pub struct RegistrationServiceBuilder<S> {
    store: S,
    config: RegistrationConfig,
}

impl<S: UserStore> RegistrationServiceBuilder<S> {
    /// Create a new builder over `store` with the default rules.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: RegistrationConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: RegistrationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the inclusive username length bounds.
    pub fn with_username_length(mut self, min: usize, max: usize) -> Self {
        self.config.username_min_length = min;
        self.config.username_max_length = max;
        self
    }

    /// Set the minimum password length.
    pub fn with_password_min_length(mut self, min: usize) -> Self {
        self.config.password_min_length = min;
        self
    }

    /// Set the characters that satisfy the password special character rule.
    pub fn with_special_characters(mut self, characters: impl Into<String>) -> Self {
        self.config.password_special_characters = characters.into();
        self
    }

    /// Set the maximum email address length.
    pub fn with_email_max_length(mut self, max: usize) -> Self {
        self.config.email_max_length = max;
        self
    }

    /// Build the configured registration service.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) if the configuration is invalid.
    pub fn build(self) -> ConfigResult<RegistrationService<S>> {
        RegistrationService::with_store_and_config(self.store, self.config)
    }
}
