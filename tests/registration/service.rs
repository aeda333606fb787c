//! Registration through [`RegistrationService`].

use crate::common::builders::RegistrationRequestBuilder;
use crate::common::init_logging;
use user_registration::{
    RegistrationConfig, RegistrationOutcome, RegistrationService, RegistrationServiceBuilder,
    ValidationError, storage::InMemoryUserStore,
};

#[test]
fn test_user_can_be_registered() {
    init_logging();
    let mut service = RegistrationService::new();

    let registered = service.register_user("testuser", "password123!", "testuser@example.com");

    assert!(registered, "Registration should succeed.");
    assert_eq!(
        service.get_registration_confirmation_message("testuser"),
        "User 'testuser' has been successfully registered."
    );
    assert!(service.is_registered("testuser"));
}

#[test]
fn test_empty_input_is_not_permitted() {
    init_logging();
    let mut service = RegistrationService::new();

    let request = RegistrationRequestBuilder::new()
        .without_username()
        .password("password123")
        .build();

    assert!(!request.register(&mut service));
    assert_eq!(service.user_count(), 0);
}

#[test]
fn test_invalid_email_format_is_not_permitted() {
    init_logging();
    let mut service = RegistrationService::new();

    let request = RegistrationRequestBuilder::new()
        .username("Username")
        .email("testuserexamplecom")
        .build();

    assert_eq!(request.outcome(&mut service), RegistrationOutcome::InvalidEmail);
}

#[test]
fn test_invalid_password_format_is_not_permitted() {
    init_logging();
    let mut service = RegistrationService::new();

    let registered = service.register_user("Username", "password", "testuser@example.com");

    assert!(!registered, "Registration should fail due to invalid input.");
    assert_eq!(service.user_count(), 0);
}

#[test]
fn test_password_without_special_character_is_not_permitted() {
    init_logging();
    let mut service = RegistrationService::new();

    let request = RegistrationRequestBuilder::new()
        .without_special_character()
        .build();

    assert_eq!(request.outcome(&mut service), RegistrationOutcome::InvalidPassword);
}

#[test]
fn test_taken_usernames_are_not_available() {
    init_logging();
    let mut service = RegistrationService::new();
    assert!(service.register_user("existinguser", "password123!", "existinguser@example.com"));

    let registered = service.register_user("existinguser", "password456!", "newuser@example.com");

    assert!(!registered, "Registration should fail due to username already taken.");
    assert_eq!(service.user_count(), 1);
}

#[test]
fn test_taken_usernames_compare_case_insensitively() {
    init_logging();
    let mut service = RegistrationService::new();
    assert!(service.register_user("existinguser", "password123!", "existinguser@example.com"));

    for variant in ["ExistingUser", "EXISTINGUSER", "existingUSER"] {
        assert!(
            !service.register_user(variant, "password456!", "newuser@example.com"),
            "{variant} should be rejected as a duplicate"
        );
    }
    assert_eq!(service.user_count(), 1);

    let stored = service.find_user("EXISTINGUSER").expect("user is registered");
    assert_eq!(stored.username().as_str(), "existinguser");
    assert_eq!(stored.email().as_str(), "existinguser@example.com");
}

#[test]
fn test_failed_registration_does_not_mutate_state() {
    init_logging();
    let mut service = RegistrationService::new();
    assert!(service.register_user("firstuser", "password123!", "first@example.com"));

    let before: Vec<_> = service.users().map(|u| u.id()).collect();
    assert!(!service.register_user("bad!", "password123!", "x@example.com"));
    assert!(!service.register_user("FirstUser", "password123!", "x@example.com"));
    let after: Vec<_> = service.users().map(|u| u.id()).collect();

    assert_eq!(before, after);
}

#[test]
fn test_duplicate_reported_only_for_valid_fields() {
    init_logging();
    let mut service = RegistrationService::new();
    assert!(service.register_user("existinguser", "password123!", "existinguser@example.com"));

    // Invalid password wins over the duplicate username
    let result = service.try_register_user("existinguser", "nope", "existinguser@example.com");
    assert_validation_error!(result, ValidationError::PasswordTooShort { .. });

    let result = service.try_register_user("existinguser", "password123!", "a@example.com");
    assert_error_message_contains!(result, "already registered");
}

#[test]
fn test_email_stored_lower_cased() {
    init_logging();
    let mut service = RegistrationService::new();

    let user = service
        .try_register_user("caseuser", "password123!", "EmAiL@hOtMaIl.CoM")
        .expect("registration should succeed");

    assert_eq!(user.email().as_str(), "email@hotmail.com");
}

#[test]
fn test_configured_service_from_json() {
    init_logging();
    let config = RegistrationConfig::from_json_str(
        r#"{"username_min_length": 3, "password_min_length": 10}"#,
    )
    .expect("config is valid");
    let mut service = RegistrationServiceBuilder::new(InMemoryUserStore::new())
        .with_config(config)
        .build()
        .expect("config is valid");

    assert!(service.register_user("bob", "password12!", "bob@example.com"));
    assert!(!service.register_user("alice", "passwd12!", "alice@example.com"));
}
