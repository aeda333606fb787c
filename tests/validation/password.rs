//! Password validation tests.

use user_registration::{RegistrationService, ValidationError};

#[test]
fn test_long_password_with_special_character_is_valid() {
    let service = RegistrationService::new();
    assert!(service.validate_password("ValidPassword!"));
}

#[test]
fn test_password_below_eight_characters_is_invalid() {
    let service = RegistrationService::new();
    assert!(!service.validate_password("bad!"));
    assert_eq!(
        service.check_password("bad!"),
        Err(ValidationError::PasswordTooShort { length: 4, min: 8 })
    );
}

#[test]
fn test_password_missing_special_character_is_invalid() {
    let service = RegistrationService::new();
    assert!(!service.validate_password("InvalidPassword"));
    assert_eq!(
        service.check_password("InvalidPassword"),
        Err(ValidationError::PasswordMissingSpecialCharacter)
    );
}

#[test]
fn test_password_of_only_special_characters_is_valid() {
    let service = RegistrationService::new();
    assert!(service.validate_password("!@#$%^&*"));
}

#[test]
fn test_each_special_character_counts() {
    let service = RegistrationService::new();
    for special in "!@#$%^&*()-_+=[]{}|;:,.<>?".chars() {
        let password = format!("abcdefg{special}");
        assert!(service.validate_password(&password), "{password:?} should be valid");
    }
}

#[test]
fn test_characters_outside_the_set_do_not_count() {
    let service = RegistrationService::new();
    for other in ['~', '/', '\\', '"', '\'', '`', ' '] {
        let password = format!("abcdefg{other}");
        assert!(!service.validate_password(&password), "{password:?} should be invalid");
    }
}
