//! Registration scenario tests.
//!
//! - `service` - registration through the synchronous service
//! - `shared` - registration through the shared handle from concurrent tasks

pub mod service;
