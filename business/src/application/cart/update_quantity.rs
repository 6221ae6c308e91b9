use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::MAX_LINE_QUANTITY;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase, CartMutation};
use crate::domain::cart::use_cases::merge::{MergeCartParams, MergeCartUseCase};
use crate::domain::cart::use_cases::update_quantity::{
    QuantityAction, UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct UpdateCartQuantityUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub add: Arc<dyn AddToCartUseCase>,
    pub merge: Arc<dyn MergeCartUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<CartMutation, CartError> {
        let mut state = params.state;
        if let Some(user_id) = params.user
            && !state.merged
        {
            state = self
                .merge
                .execute(MergeCartParams { user_id, state })
                .await?;
        }

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let current = state.cart.quantity_of(product.id);
        let new_quantity = match params.action {
            QuantityAction::Increase => {
                let next = current + 1;
                if next > MAX_LINE_QUANTITY {
                    return Err(CartError::QuantityAboveMaximum);
                }
                if next > product.stock {
                    return Err(CartError::InsufficientStock {
                        available: product.stock,
                    });
                }
                next
            }
            QuantityAction::Decrease => {
                if current <= 1 {
                    return Err(CartError::QuantityBelowMinimum);
                }
                current - 1
            }
        };

        self.add
            .execute(AddToCartParams {
                user: params.user,
                state,
                product_id: product.id,
                quantity: new_quantity,
                override_quantity: true,
            })
            .await
    }
}
