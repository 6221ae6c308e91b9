use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::account::errors::AccountError;
use business::domain::account::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::account::use_cases::register::{RegisterParams, RegisterUseCase};

use crate::api::account::dto::{
    LoginRequest, RegisterRequest, UserResponse, ValidationErrorResponse,
};
use crate::api::account::error_mapper::validation_response;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::{log_in, log_out};
use crate::api::tags::ApiTags;

pub struct AccountApi {
    register_use_case: Arc<dyn RegisterUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
}

impl AccountApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
        }
    }
}

/// Account API
///
/// Registration, login and logout. Login stores the user id in the session
/// and re-arms the cart merge; logout drops the session entirely.
#[OpenApi]
impl AccountApi {
    /// Register a new account
    ///
    /// Validates every field independently and reports all violations
    /// together.
    #[oai(
        path = "/accounts/register",
        method = "post",
        tag = "ApiTags::Accounts"
    )]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterParams {
            username: body.0.username,
            email: body.0.email,
            phone: body.0.phone,
            password: body.0.password,
            password_confirm: body.0.password_confirm,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(AccountError::Validation(violations)) => {
                RegisterResponse::BadRequest(Json(validation_response(&violations)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RegisterResponse::InternalError(json)
            }
        }
    }

    /// Log in
    ///
    /// Verifies the credentials and binds the account to the session.
    #[oai(path = "/accounts/login", method = "post", tag = "ApiTags::Accounts")]
    async fn login(&self, session: &Session, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            username: body.0.username,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(user) => {
                log_in(session, user.id);
                LoginResponse::Ok(Json(user.into()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Log out
    ///
    /// Drops the session, including the session cart.
    #[oai(path = "/accounts/logout", method = "post", tag = "ApiTags::Accounts")]
    async fn logout(&self, session: &Session) -> LogoutResponse {
        log_out(session);
        LogoutResponse::NoContent
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 204)]
    NoContent,
}
