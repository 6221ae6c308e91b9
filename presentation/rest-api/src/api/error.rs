use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every storefront endpoint. `message` carries a
/// code-style identifier (e.g. "cart.product_not_found") for i18n lookup;
/// `name` groups errors by kind ("NotFound", "ValidationError", ...).
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Domain-error to HTTP mapping, implemented per domain in the
/// `error_mapper` modules.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
