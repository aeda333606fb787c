//! # Registration Demo
//!
//! Registers a handful of users and prints what happened to each attempt.
//! The library logs through the `log` crate; this demo uses env_logger as the
//! backend.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example registration_demo
//! ```

use user_registration::{RegistrationOutcome, RegistrationService};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let mut service = RegistrationService::new();

    let attempts = [
        ("testuser", "password123!", "testuser@example.com"),
        ("TestUser", "password456!", "other@example.com"),
        ("vĺlidÜsér", "!@#$%^&*", "EmAiL@hOtMaIl.CoM"),
        ("", "password123", "testuser@example.com"),
        ("Username", "password", "testuser@example.com"),
        ("Username", "password123!", "userexample,com"),
    ];

    for (username, password, email) in attempts {
        match service.register_user_with_outcome(username, password, email) {
            RegistrationOutcome::Registered => {
                println!("{}", service.get_registration_confirmation_message(username));
            }
            outcome => println!("'{}' not registered: {}", username, outcome),
        }
    }

    println!("{} users registered", service.user_count());
    for user in service.users() {
        println!("  {} <{}> registered at {}", user.username(), user.email(), user.registered_at());
    }
}
