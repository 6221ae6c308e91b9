use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::shared::value_objects::UserId;

pub struct ClearCartParams {
    pub user: Option<UserId>,
    pub state: CartState,
}

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self, params: ClearCartParams) -> Result<CartState, CartError>;
}
