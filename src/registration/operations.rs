//! Validation and registration operations.
//!
//! The boolean operations (`validate_*`, `register_user`) collapse every failure
//! into `false`. The `check_*` and `try_register_user` variants report which
//! rule failed, and `register_user_with_outcome` gives the same as a plain value.

use super::core::RegistrationService;
use super::outcome::RegistrationOutcome;
use crate::error::{RegistrationError, RegistrationResult, ValidationResult};
use crate::resource::{EmailAddress, Password, User, UserName};
use crate::storage::UserStore;
use crate::validation;
use log::{debug, info, warn};

/// Confirmation text for a registered username.
///
/// Pure formatting; it does not check that the user exists.
pub fn confirmation_message(username: &str) -> String {
    format!("User '{}' has been successfully registered.", username)
}

impl<S: UserStore> RegistrationService<S> {
    /// Whether `username` satisfies the username rule.
    pub fn validate_username(&self, username: &str) -> bool {
        self.check_username(username).is_ok()
    }

    /// Whether `password` satisfies the password rule.
    pub fn validate_password(&self, password: &str) -> bool {
        self.check_password(password).is_ok()
    }

    /// Whether `email` is a syntactically valid address, ignoring case.
    pub fn validate_email(&self, email: &str) -> bool {
        self.check_email(email).is_ok()
    }

    /// Check `username`, reporting the first rule it breaks.
    pub fn check_username(&self, username: &str) -> ValidationResult<()> {
        validation::check_username(username, &self.config)
    }

    /// Check `password`, reporting the first rule it breaks.
    pub fn check_password(&self, password: &str) -> ValidationResult<()> {
        validation::check_password(password, &self.config)
    }

    /// Check `email`, reporting why it is not a valid address.
    pub fn check_email(&self, email: &str) -> ValidationResult<()> {
        validation::check_email(email, &self.config)
    }

    /// Validate and register a user.
    ///
    /// Returns `false` without changing any state if a field is invalid or the
    /// username is already registered under any casing.
    pub fn register_user(&mut self, username: &str, password: &str, email: &str) -> bool {
        self.try_register_user(username, password, email).is_ok()
    }

    /// Validate and register a user, reporting the outcome as a value.
    pub fn register_user_with_outcome(
        &mut self,
        username: &str,
        password: &str,
        email: &str,
    ) -> RegistrationOutcome {
        RegistrationOutcome::from(&self.try_register_user(username, password, email))
    }

    /// Validate and register a user, reporting why registration failed.
    ///
    /// Fields are checked in the order username, password, email; the first
    /// failing rule is returned. The duplicate check runs only once all three
    /// fields are valid.
    ///
    /// # Errors
    ///
    /// * [`RegistrationError::Validation`] - a field broke its format rule
    /// * [`RegistrationError::DuplicateUsername`] - the username is taken
    /// * [`RegistrationError::Storage`] - the store refused the insert
    pub fn try_register_user(
        &mut self,
        username: &str,
        password: &str,
        email: &str,
    ) -> RegistrationResult<User> {
        let user = self.build_user(username, password, email).inspect_err(|e| {
            debug!("Rejected registration for '{}': {}", username, e);
        })?;

        if self.store.contains_username(user.username().as_str()) {
            warn!("Username '{}' is already registered", username);
            return Err(RegistrationError::duplicate_username(username));
        }

        self.store.insert(user.clone())?;
        info!(
            "Registered user '{}' with id {} ({} users total)",
            user.username(),
            user.id(),
            self.store.len()
        );

        Ok(user)
    }

    /// Confirmation text for `username`; see [`confirmation_message`].
    pub fn get_registration_confirmation_message(&self, username: &str) -> String {
        confirmation_message(username)
    }

    fn build_user(&self, username: &str, password: &str, email: &str) -> RegistrationResult<User> {
        let username = UserName::with_config(username.to_string(), &self.config)?;
        let password = Password::with_config(password.to_string(), &self.config)?;
        let email = EmailAddress::with_config(email.to_string(), &self.config)?;
        Ok(User::new(username, password, email))
    }
}
