use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::shared::value_objects::UserId;

pub struct MergeCartParams {
    pub user_id: UserId,
    pub state: CartState,
}

/// One-shot merge of the session cart into the user's stored cart.
/// Guarded by `CartState::merged`; callers invoke it before every cart
/// operation once the caller is authenticated. The guard itself is not
/// transactionally safe: two concurrent first requests can both merge.
#[async_trait]
pub trait MergeCartUseCase: Send + Sync {
    async fn execute(&self, params: MergeCartParams) -> Result<CartState, CartError>;
}
