use std::sync::Arc;

use async_trait::async_trait;

use crate::application::account::password::hash_password;
use crate::domain::account::errors::{AccountError, AccountField, FieldViolation};
use crate::domain::account::model::User;
use crate::domain::account::repository::UserRepository;
use crate::domain::account::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::account::validation;
use crate::domain::logger::Logger;

pub struct RegisterUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<User, AccountError> {
        self.logger
            .info(&format!("Registering account: {}", params.username));

        let mut violations: Vec<FieldViolation> = Vec::new();

        // Fields are evaluated independently; within a field, format comes
        // before the uniqueness lookup.
        match validation::validate_username(&params.username) {
            Some(violation) => violations.push(violation),
            None => {
                if self.repository.username_exists(&params.username).await? {
                    violations.push(FieldViolation::new(
                        AccountField::Username,
                        "account.username_taken",
                    ));
                }
            }
        }

        match validation::validate_email(&params.email) {
            Some(violation) => violations.push(violation),
            None => {
                if self.repository.email_exists(&params.email).await? {
                    violations.push(FieldViolation::new(
                        AccountField::Email,
                        "account.email_taken",
                    ));
                }
            }
        }

        let phone = params.phone.as_deref().map(validation::normalize_phone);
        if let Some(normalized) = &phone
            && let Some(violation) = validation::validate_phone(normalized)
        {
            violations.push(violation);
        }

        if let Some(violation) = validation::validate_password(&params.password) {
            violations.push(violation);
        }
        if let Some(violation) =
            validation::validate_password_confirmation(&params.password, &params.password_confirm)
        {
            violations.push(violation);
        }

        if !violations.is_empty() {
            return Err(AccountError::Validation(violations));
        }

        let password_hash =
            hash_password(&params.password).map_err(|_| AccountError::PasswordHash)?;
        let phone = phone.filter(|p| !p.is_empty());
        let user = User::new(params.username, params.email, phone, password_hash);

        self.repository.save(&user).await?;

        self.logger
            .info(&format!("Account registered with id: {}", user.id));
        Ok(user)
    }
}
