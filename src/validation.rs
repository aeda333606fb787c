//! Field format rules for usernames, passwords and email addresses.
//!
//! All functions here are pure: the same input and configuration always give
//! the same answer. The `validate_*` functions answer yes/no under the default
//! [`RegistrationConfig`]; the `check_*` functions take an explicit
//! configuration and report the first rule that failed.
//!
//! ```rust
//! use user_registration::validation::{validate_email, validate_password, validate_username};
//!
//! assert!(validate_username("validUser123"));
//! assert!(!validate_username("BAD_USERNAME!"));
//! assert!(validate_password("ValidPassword!"));
//! assert!(validate_email("EmAiL@hOtMaIl.CoM"));
//! ```

use crate::config::RegistrationConfig;
use crate::error::{ValidationError, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Maximum length of the local part of an address (RFC 5321).
pub const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;

// addr-spec over lower-cased input: dot-atom or quoted-string local part,
// then a hostname with at least two labels.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
        r#"|"(?:[\x20\x21\x23-\x5b\x5d-\x7e]|\\[\x20-\x7e])*")"#,
        r#"@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?$"#,
    ))
    .expect("email address pattern is valid")
});

static DEFAULT_CONFIG: LazyLock<RegistrationConfig> = LazyLock::new(RegistrationConfig::default);

/// Whether `c` is a Unicode letter (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`) or decimal digit (`Nd`).
///
/// Other numerics such as `²`, `½` or `Ⅻ` and combining marks are rejected.
pub fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Whether `username` is 5 to 20 characters, all letters or digits.
pub fn validate_username(username: &str) -> bool {
    check_username(username, &DEFAULT_CONFIG).is_ok()
}

/// Whether `password` is at least 8 characters with at least one special character.
pub fn validate_password(password: &str) -> bool {
    check_password(password, &DEFAULT_CONFIG).is_ok()
}

/// Whether `email` is a syntactically valid address, compared case-insensitively.
pub fn validate_email(email: &str) -> bool {
    check_email(email, &DEFAULT_CONFIG).is_ok()
}

/// Check a username against the configured length bounds and character rule.
///
/// Length is counted in Unicode scalar values. Every character must be a
/// letter or decimal digit, so accented and non-Latin letters are accepted.
pub fn check_username(username: &str, config: &RegistrationConfig) -> ValidationResult<()> {
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }

    let length = username.chars().count();
    if length < config.username_min_length || length > config.username_max_length {
        return Err(ValidationError::UsernameLength {
            length,
            min: config.username_min_length,
            max: config.username_max_length,
        });
    }

    if let Some(character) = username.chars().find(|&c| !is_letter_or_digit(c)) {
        return Err(ValidationError::UsernameCharacter { character });
    }

    Ok(())
}

/// Check a password against the configured minimum length and special character set.
pub fn check_password(password: &str, config: &RegistrationConfig) -> ValidationResult<()> {
    let length = password.chars().count();
    if length < config.password_min_length {
        return Err(ValidationError::PasswordTooShort {
            length,
            min: config.password_min_length,
        });
    }

    if !password.chars().any(|c| config.is_special_character(c)) {
        return Err(ValidationError::PasswordMissingSpecialCharacter);
    }

    Ok(())
}

/// Check an email address and return its normalized (lower-cased) form.
pub fn normalize_email(email: &str, config: &RegistrationConfig) -> ValidationResult<String> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }

    let normalized = email.to_lowercase();
    let length = normalized.chars().count();
    if length > config.email_max_length {
        return Err(ValidationError::EmailTooLong {
            length,
            max: config.email_max_length,
        });
    }

    if !EMAIL_REGEX.is_match(&normalized) {
        return Err(ValidationError::invalid_email(email));
    }

    // The domain never contains '@', so the last one separates the local part.
    let local_length = normalized.rfind('@').unwrap_or(0);
    if local_length > MAX_EMAIL_LOCAL_PART_LENGTH {
        return Err(ValidationError::invalid_email(email));
    }

    Ok(normalized)
}

/// Check an email address for addr-spec conformance.
pub fn check_email(email: &str, config: &RegistrationConfig) -> ValidationResult<()> {
    normalize_email(email, config).map(|_| ())
}
