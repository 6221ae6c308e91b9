/// Form field a validation failure is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Username,
    Email,
    Phone,
    Password,
    PasswordConfirm,
}

impl AccountField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountField::Username => "username",
            AccountField::Email => "email",
            AccountField::Phone => "phone",
            AccountField::Password => "password",
            AccountField::PasswordConfirm => "password_confirm",
        }
    }
}

/// One validation failure, attached to its field.
/// Codes follow the i18n identifier convention used across the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: AccountField,
    pub code: &'static str,
}

impl FieldViolation {
    pub fn new(field: AccountField, code: &'static str) -> Self {
        Self { field, code }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account.validation_failed")]
    Validation(Vec<FieldViolation>),
    #[error("account.invalid_credentials")]
    InvalidCredentials,
    #[error("account.password_hash_failed")]
    PasswordHash,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
