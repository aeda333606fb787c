//! Registration service: validation rules plus a duplicate-free user store.
//!
//! # Module Organization
//!
//! * [`core`] - RegistrationService struct, constructors and queries
//! * [`operations`] - Validation and registration operations
//! * [`builder`] - Builder for services with non-default rules
//! * [`outcome`] - Registration outcome as a plain value
//! * [`shared`] - Task-safe shared handle

pub mod builder;
pub mod core;
pub mod operations;
pub mod outcome;
pub mod shared;


pub use builder::RegistrationServiceBuilder;
pub use self::core::RegistrationService;
pub use operations::confirmation_message;
pub use outcome::RegistrationOutcome;
pub use shared::SharedRegistrationService;
