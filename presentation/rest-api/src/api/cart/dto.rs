use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartLine, CartView};
use business::domain::cart::use_cases::update_quantity::QuantityAction;

use crate::api::catalog::dto::ProductResponse;

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Requested quantity; clamped to the per-line maximum and live stock.
    #[oai(default = "default_quantity")]
    pub quantity: u32,
    /// Replace the current line quantity instead of adding to it.
    #[oai(rename = "override", default)]
    pub override_quantity: bool,
}

#[derive(Debug, Clone, Object)]
pub struct AddToCartResponse {
    /// Number of distinct products in the cart after the mutation.
    pub cart_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum QuantityActionDto {
    #[oai(rename = "increase")]
    Increase,
    #[oai(rename = "decrease")]
    Decrease,
}

impl From<QuantityActionDto> for QuantityAction {
    fn from(dto: QuantityActionDto) -> Self {
        match dto {
            QuantityActionDto::Increase => QuantityAction::Increase,
            QuantityActionDto::Decrease => QuantityAction::Decrease,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    pub action: QuantityActionDto,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityResponse {
    pub success: bool,
    /// Line quantity after the adjustment.
    pub quantity: u32,
    /// Price times quantity for the adjusted line.
    pub item_total: String,
    pub cart_total: String,
    pub cart_count: u32,
}

#[derive(Debug, Clone, Object)]
pub struct RemoveFromCartResponse {
    pub success: bool,
    pub cart_count: u32,
    pub cart_total: String,
}

#[derive(Debug, Clone, Object)]
pub struct ClearCartResponse {
    pub success: bool,
    pub cart_count: u32,
    pub cart_total: String,
}

/// Body for quantity-limit rejections.
#[derive(Debug, Clone, Object)]
pub struct CartConflictResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    pub price: String,
    pub total_price: String,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            product: line.product.into(),
            quantity: line.quantity,
            price: line.price.to_string(),
            total_price: line.total_price.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub total_price: String,
    pub total_quantity: u32,
    pub unique_count: u32,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            lines: view.lines.into_iter().map(|l| l.into()).collect(),
            total_price: view.total_price.to_string(),
            total_quantity: view.total_quantity,
            unique_count: view.unique_count,
        }
    }
}
