use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::User;

pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub password_confirm: String,
}

/// Validates every field independently, surfaces all violations together,
/// and persists the account with a hashed password when the form is valid.
#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<User, AccountError>;
}
