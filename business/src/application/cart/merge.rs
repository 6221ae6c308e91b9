use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartState, SessionCart};
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::merge::{MergeCartParams, MergeCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct MergeCartUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MergeCartUseCase for MergeCartUseCaseImpl {
    async fn execute(&self, params: MergeCartParams) -> Result<CartState, CartError> {
        let MergeCartParams { user_id, state } = params;
        if state.merged {
            return Ok(state);
        }

        self.logger
            .info(&format!("Merging session cart for user {user_id}"));

        // Best effort per item, not atomic across items. Each write is a
        // single additive upsert clamped to the live stock, so existing
        // rows gain the session quantity and new rows start from it.
        for (product_id, quantity) in state.cart.quantities() {
            // Stale sessions can carry zero lines; the store never does.
            if quantity == 0 {
                continue;
            }

            let product = self
                .product_repository
                .get_by_id(product_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CartError::ProductNotFound,
                    other => CartError::Repository(other),
                })?;

            self.cart_item_repository
                .upsert_add(user_id, product.id, quantity, product.stock)
                .await?;
        }

        // Rebuild the session cart from the authoritative rows, picking up
        // the user's previously stored lines. Rows whose product has
        // vanished are dropped.
        let rows = self.cart_item_repository.get_all(user_id).await?;
        let ids: Vec<Uuid> = rows.iter().map(|row| row.product_id).collect();
        let products = self.product_repository.get_by_ids(&ids).await?;
        let prices: HashMap<Uuid, BigDecimal> =
            products.into_iter().map(|p| (p.id, p.price)).collect();

        let mut cart = SessionCart::default();
        for row in rows {
            if let Some(price) = prices.get(&row.product_id) {
                cart.set_line(row.product_id, row.quantity, price);
            }
        }

        Ok(CartState { cart, merged: true })
    }
}
