use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// Registered account. Field-level validation happens before construction
/// (see `validation`); the password arrives here already hashed.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
    ) -> Self {
        Self {
            id: UserId::new(Uuid::new_v4()),
            username,
            email,
            phone,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        username: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            phone,
            password_hash,
            created_at,
        }
    }
}
