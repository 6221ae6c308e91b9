use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::account::errors::{AccountError, FieldViolation};

use crate::api::account::dto::{FieldErrorResponse, ValidationErrorResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AccountError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AccountError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "account.validation_failed",
            ),
            AccountError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "InvalidCredentials",
                "account.invalid_credentials",
            ),
            AccountError::PasswordHash | AccountError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

fn violation_message(code: &str) -> &'static str {
    match code {
        "account.username_too_short" => "Username must be at least 3 characters long.",
        "account.username_too_long" => "Username must be at most 30 characters long.",
        "account.username_letters_only" => "Username may only contain letters.",
        "account.username_taken" => "This username is already taken.",
        "account.email_invalid" => "Enter a valid email address.",
        "account.email_taken" => "An account with this email already exists.",
        "account.phone_invalid" => "Phone number must be exactly 10 digits.",
        "account.password_too_short" => "Password must be at least 8 characters long.",
        "account.password_needs_letter" => "Password must contain at least one letter.",
        "account.password_needs_digit" => "Password must contain at least one digit.",
        "account.password_mismatch" => "Passwords do not match.",
        _ => "Invalid value.",
    }
}

/// Renders the collected violations as the registration failure body.
pub fn validation_response(violations: &[FieldViolation]) -> ValidationErrorResponse {
    ValidationErrorResponse {
        name: "ValidationError".to_string(),
        errors: violations
            .iter()
            .map(|violation| FieldErrorResponse {
                field: violation.field.as_str().to_string(),
                message: violation_message(violation.code).to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::account::errors::AccountField;

    #[test]
    fn should_render_one_entry_per_violation() {
        let violations = vec![
            FieldViolation::new(AccountField::Username, "account.username_taken"),
            FieldViolation::new(AccountField::Password, "account.password_too_short"),
        ];

        let body = validation_response(&violations);

        assert_eq!(body.name, "ValidationError");
        assert_eq!(body.errors.len(), 2);
        assert_eq!(body.errors[0].field, "username");
        assert_eq!(body.errors[0].message, "This username is already taken.");
        assert_eq!(body.errors[1].field, "password");
    }

    #[test]
    fn should_fall_back_to_generic_message_for_unknown_code() {
        let violations = vec![FieldViolation::new(AccountField::Email, "account.unknown")];

        let body = validation_response(&violations);

        assert_eq!(body.errors[0].message, "Invalid value.");
    }
}
