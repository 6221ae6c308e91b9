use std::sync::Arc;

use async_trait::async_trait;

use crate::application::account::password::verify_password;
use crate::domain::account::errors::AccountError;
use crate::domain::account::model::User;
use crate::domain::account::repository::UserRepository;
use crate::domain::account::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, AccountError> {
        let user = self
            .repository
            .get_by_username(&params.username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, &params.password) {
            self.logger
                .warn(&format!("Failed login attempt for: {}", params.username));
            return Err(AccountError::InvalidCredentials);
        }

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::account::password::hash_password;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
            async fn username_exists(&self, username: &str) -> Result<bool, RepositoryError>;
            async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_user() -> User {
        User::new(
            "johndoe".to_string(),
            "john@example.com".to_string(),
            None,
            hash_password("abcdefg1").unwrap(),
        )
    }

    #[tokio::test]
    async fn should_log_in_with_correct_credentials() {
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_username()
            .returning(|_| Ok(Some(stored_user())));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "johndoe".to_string(),
                password: "abcdefg1".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().username, "johndoe");
    }

    #[tokio::test]
    async fn should_reject_wrong_password() {
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_username()
            .returning(|_| Ok(Some(stored_user())));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "johndoe".to_string(),
                password: "wrongpass1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn should_reject_unknown_username() {
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_username().returning(|_| Ok(None));

        let use_case = LoginUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                username: "nobody".to_string(),
                password: "abcdefg1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }
}
