use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::MAX_LINE_QUANTITY;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.product_not_found")
            }
            CartError::InsufficientStock { .. } => (
                StatusCode::CONFLICT,
                "QuantityLimit",
                "cart.insufficient_stock",
            ),
            CartError::QuantityAboveMaximum => (
                StatusCode::CONFLICT,
                "QuantityLimit",
                "cart.quantity_above_maximum",
            ),
            CartError::QuantityBelowMinimum => (
                StatusCode::CONFLICT,
                "QuantityLimit",
                "cart.quantity_below_minimum",
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

/// Human-readable message for quantity-limit rejections, rendered in the
/// conflict body alongside `success: false`.
pub fn quantity_limit_message(err: &CartError) -> Option<String> {
    match err {
        CartError::InsufficientStock { available } => {
            Some(format!("Only {available} units available in stock."))
        }
        CartError::QuantityAboveMaximum => {
            Some(format!("Maximum quantity limit is {MAX_LINE_QUANTITY}!"))
        }
        CartError::QuantityBelowMinimum => Some("Minimum quantity is 1!".to_string()),
        _ => None,
    }
}
