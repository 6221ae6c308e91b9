use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::account::model::User;
use business::domain::account::repository::UserRepository;
use business::domain::errors::RepositoryError;

use super::entity::UserEntity;

const USER_COLUMNS: &str = "id, username, email, phone, password_hash, created_at";

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_save_error(error: sqlx::Error) -> RepositoryError {
    let is_unique_violation = error
        .as_database_error()
        .map(|db_error| db_error.is_unique_violation())
        .unwrap_or(false);

    if is_unique_violation {
        RepositoryError::Duplicated
    } else {
        RepositoryError::DatabaseError
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, RepositoryError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(exists)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(exists)
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO users (id, username, email, phone, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_save_error)?;

        Ok(())
    }
}
