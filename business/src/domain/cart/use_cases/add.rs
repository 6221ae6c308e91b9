use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::shared::value_objects::UserId;

pub struct AddToCartParams {
    pub user: Option<UserId>,
    pub state: CartState,
    pub product_id: Uuid,
    pub quantity: u32,
    /// Replace the line's quantity instead of incrementing it.
    pub override_quantity: bool,
}

/// Result of a cart mutation: the updated session state and the resulting
/// line quantity after clamping.
pub struct CartMutation {
    pub state: CartState,
    pub quantity: u32,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<CartMutation, CartError>;
}
