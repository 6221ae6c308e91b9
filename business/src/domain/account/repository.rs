use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn username_exists(&self, username: &str) -> Result<bool, RepositoryError>;
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}
