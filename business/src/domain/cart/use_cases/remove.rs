use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveFromCartParams {
    pub user: Option<UserId>,
    pub state: CartState,
    pub product_id: Uuid,
}

#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<CartState, CartError>;
}
