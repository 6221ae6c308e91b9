//! Field-level registration validators. Each validator reports the first
//! violation for its field; fields are evaluated independently so the
//! caller can surface all failures together.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::{AccountField, FieldViolation};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;
pub const PASSWORD_MIN_LENGTH: usize = 8;

static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid literal pattern"));
static TEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid literal pattern"));
static HAS_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("valid literal pattern"));
static HAS_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("valid literal pattern"));
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid literal pattern"));

/// Letters only, length 3 to 30. Uniqueness is checked separately by the
/// register use case.
pub fn validate_username(username: &str) -> Option<FieldViolation> {
    if !LETTERS_ONLY.is_match(username) {
        return Some(FieldViolation::new(
            AccountField::Username,
            "account.username_letters_only",
        ));
    }
    if username.len() < USERNAME_MIN_LENGTH {
        return Some(FieldViolation::new(
            AccountField::Username,
            "account.username_too_short",
        ));
    }
    if username.len() > USERNAME_MAX_LENGTH {
        return Some(FieldViolation::new(
            AccountField::Username,
            "account.username_too_long",
        ));
    }
    None
}

pub fn validate_email(email: &str) -> Option<FieldViolation> {
    if !EMAIL_SHAPE.is_match(email) {
        return Some(FieldViolation::new(
            AccountField::Email,
            "account.email_invalid",
        ));
    }
    None
}

/// Strips spaces and dashes; validation runs on the normalized value.
pub fn normalize_phone(phone: &str) -> String {
    phone.replace([' ', '-'], "")
}

/// Exactly 10 digits after normalization. Empty input is allowed (the
/// field is optional).
pub fn validate_phone(normalized: &str) -> Option<FieldViolation> {
    if normalized.is_empty() {
        return None;
    }
    if !TEN_DIGITS.is_match(normalized) {
        return Some(FieldViolation::new(
            AccountField::Phone,
            "account.phone_invalid",
        ));
    }
    None
}

/// Minimum 8 characters with at least one letter and one digit.
pub fn validate_password(password: &str) -> Option<FieldViolation> {
    if password.len() < PASSWORD_MIN_LENGTH {
        return Some(FieldViolation::new(
            AccountField::Password,
            "account.password_too_short",
        ));
    }
    if !HAS_LETTER.is_match(password) {
        return Some(FieldViolation::new(
            AccountField::Password,
            "account.password_needs_letter",
        ));
    }
    if !HAS_DIGIT.is_match(password) {
        return Some(FieldViolation::new(
            AccountField::Password,
            "account.password_needs_digit",
        ));
    }
    None
}

pub fn validate_password_confirmation(password: &str, confirm: &str) -> Option<FieldViolation> {
    if password != confirm {
        return Some(FieldViolation::new(
            AccountField::PasswordConfirm,
            "account.password_mismatch",
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_username_shorter_than_three_letters() {
        let violation = validate_username("ab").unwrap();
        assert_eq!(violation.code, "account.username_too_short");
    }

    #[test]
    fn should_reject_username_with_digits() {
        let violation = validate_username("johndoe123").unwrap();
        assert_eq!(violation.code, "account.username_letters_only");
    }

    #[test]
    fn should_reject_username_longer_than_thirty_letters() {
        let violation = validate_username(&"a".repeat(31)).unwrap();
        assert_eq!(violation.code, "account.username_too_long");
    }

    #[test]
    fn should_accept_letters_only_username() {
        assert!(validate_username("johndoe").is_none());
    }

    #[test]
    fn should_normalize_phone_with_dashes_and_spaces() {
        assert_eq!(normalize_phone("123-456-7890"), "1234567890");
        assert_eq!(normalize_phone("123 456 7890"), "1234567890");
    }

    #[test]
    fn should_accept_ten_digit_phone_after_normalization() {
        let normalized = normalize_phone("123-456-7890");
        assert!(validate_phone(&normalized).is_none());
    }

    #[test]
    fn should_reject_short_phone() {
        let violation = validate_phone("12345").unwrap();
        assert_eq!(violation.code, "account.phone_invalid");
    }

    #[test]
    fn should_accept_empty_phone_as_optional() {
        assert!(validate_phone("").is_none());
    }

    #[test]
    fn should_reject_short_password() {
        let violation = validate_password("ab1").unwrap();
        assert_eq!(violation.code, "account.password_too_short");
    }

    #[test]
    fn should_require_letter_in_password() {
        let violation = validate_password("12345678").unwrap();
        assert_eq!(violation.code, "account.password_needs_letter");
    }

    #[test]
    fn should_require_digit_in_password() {
        let violation = validate_password("abcdefgh").unwrap();
        assert_eq!(violation.code, "account.password_needs_digit");
    }

    #[test]
    fn should_accept_password_with_letter_and_digit() {
        assert!(validate_password("abcdefg1").is_none());
    }

    #[test]
    fn should_reject_mismatched_confirmation() {
        let violation = validate_password_confirmation("abcdefg1", "abcdefg2").unwrap();
        assert_eq!(violation.code, "account.password_mismatch");
    }

    #[test]
    fn should_reject_malformed_email() {
        let violation = validate_email("not-an-email").unwrap();
        assert_eq!(violation.code, "account.email_invalid");
    }

    #[test]
    fn should_accept_plain_email() {
        assert!(validate_email("john@example.com").is_none());
    }
}
