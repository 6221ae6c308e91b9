use poem_openapi::Object;
use uuid::Uuid;

use business::domain::account::model::User;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_uuid(),
            username: user.username,
            email: user.email,
            phone: user.phone,
        }
    }
}

/// One rejected form field with a human-readable message.
#[derive(Debug, Clone, Object)]
pub struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

/// Registration failure body: every violated field is reported together.
#[derive(Debug, Clone, Object)]
pub struct ValidationErrorResponse {
    pub name: String,
    pub errors: Vec<FieldErrorResponse>,
}
