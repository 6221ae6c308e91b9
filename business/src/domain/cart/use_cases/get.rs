use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartState, CartView};
use crate::domain::shared::value_objects::UserId;

pub struct GetCartParams {
    pub user: Option<UserId>,
    pub state: CartState,
}

/// Updated session state plus the enriched read model.
pub struct CartSnapshot {
    pub state: CartState,
    pub view: CartView,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<CartSnapshot, CartError>;
}
