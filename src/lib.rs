//! In-memory user registration for Rust.
//!
//! Validates usernames, passwords and email addresses against fixed format
//! rules and registers users in a process-memory store that rejects duplicate
//! usernames regardless of case. Nothing is persisted and no mail is sent.
//!
//! # Core Components
//!
//! - [`RegistrationService`] - Validation and registration operations
//! - [`RegistrationServiceBuilder`] - Services with non-default rules
//! - [`SharedRegistrationService`] - Task-safe handle with atomic registration
//! - [`UserStore`] - Trait for the backing collection of users
//!
//! # Quick Start
//!
//! ```rust
//! use user_registration::RegistrationService;
//!
//! let mut service = RegistrationService::new();
//!
//! if service.register_user("testuser", "password123!", "testuser@example.com") {
//!     println!("{}", service.get_registration_confirmation_message("testuser"));
//! }
//!
//! // Same username, different case
//! assert!(!service.register_user("TestUser", "password456!", "other@example.com"));
//! ```
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade. Rejections are logged at `debug`,
//! duplicate attempts at `warn` and successful registrations at `info`.
//! Passwords are never logged.

pub mod config;
pub mod error;
pub mod registration;
pub mod resource;
pub mod storage;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::RegistrationConfig;
pub use error::{
    ConfigError, RegistrationError, RegistrationResult, ValidationError, ValidationResult,
};
pub use registration::{
    RegistrationOutcome, RegistrationService, RegistrationServiceBuilder,
    SharedRegistrationService, confirmation_message,
};
pub use resource::{EmailAddress, Password, User, UserName};
pub use storage::{InMemoryUserStore, StorageError, UserStore};
pub use validation::{validate_email, validate_password, validate_username};
