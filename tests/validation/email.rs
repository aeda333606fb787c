//! Email validation tests.

use user_registration::{RegistrationService, ValidationError};

#[test]
fn test_valid_format_is_valid() {
    let service = RegistrationService::new();
    assert!(service.validate_email("user@example.com"));
}

#[test]
fn test_comma_format_is_invalid() {
    let service = RegistrationService::new();
    assert!(!service.validate_email("userexample,com"));
}

#[test]
fn test_empty_is_invalid() {
    let service = RegistrationService::new();
    assert!(!service.validate_email(""));
    assert_eq!(service.check_email(""), Err(ValidationError::EmptyEmail));
}

#[test]
fn test_case_is_ignored() {
    let service = RegistrationService::new();
    assert!(service.validate_email("EmAiL@hOtMaIl.CoM"));
}

#[test]
fn test_common_address_shapes() {
    let service = RegistrationService::new();
    for valid in [
        "first.last@example.com",
        "user+tag@example.org",
        "user_name@sub.domain.example.co.uk",
        "1234@example.io",
        "o'brien@example.ie",
    ] {
        assert!(service.validate_email(valid), "{valid:?} should be valid");
    }
}

#[test]
fn test_malformed_addresses() {
    let service = RegistrationService::new();
    for invalid in [
        "testuserexamplecom",
        "user@example",
        "user@@example.com",
        "user name@example.com",
        "user@exa mple.com",
        " user@example.com",
        "user@example.com ",
        "user@.example.com",
        "user@example..com",
        "user@example.com.",
    ] {
        assert!(!service.validate_email(invalid), "{invalid:?} should be invalid");
    }
}

#[test]
fn test_error_names_the_submitted_address() {
    let service = RegistrationService::new();
    assert_error_message_contains!(service.check_email("userexample,com"), "userexample,com");
}
