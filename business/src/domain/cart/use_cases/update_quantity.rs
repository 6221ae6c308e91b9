use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::cart::use_cases::add::CartMutation;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    Increase,
    Decrease,
}

pub struct UpdateCartQuantityParams {
    pub user: Option<UserId>,
    pub state: CartState,
    pub product_id: Uuid,
    pub action: QuantityAction,
}

/// Single-step quantity adjustment with a floor of 1 and ceilings of the
/// line maximum and the product's stock. Limit violations are reported as
/// errors instead of silent clamping.
#[async_trait]
pub trait UpdateCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<CartMutation, CartError>;
}
