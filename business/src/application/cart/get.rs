use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;
use crate::domain::cart::use_cases::get::{CartSnapshot, GetCartParams, GetCartUseCase};
use crate::domain::cart::use_cases::merge::{MergeCartParams, MergeCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetCartUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub merge: Arc<dyn MergeCartUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<CartSnapshot, CartError> {
        let mut state = params.state;
        if let Some(user_id) = params.user
            && !state.merged
        {
            state = self
                .merge
                .execute(MergeCartParams { user_id, state })
                .await?;
        }

        // One batched lookup for all lines.
        let ids = state.cart.product_ids();
        let products = self.product_repository.get_by_ids(&ids).await?;
        let view = CartView::build(&state.cart, products);

        Ok(CartSnapshot { state, view })
    }
}
