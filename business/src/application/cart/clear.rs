use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<CartState, CartError> {
        let mut state = params.state;
        state.cart.clear();

        if let Some(user_id) = params.user {
            self.cart_item_repository.delete_all(user_id).await?;
            // The stored cart is gone; nothing left to merge this session.
            state.merged = true;
            self.logger
                .info(&format!("Cart cleared for user {user_id}"));
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, SessionCart};
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub CartItemRepo {}

        #[async_trait]
        impl CartItemRepository for CartItemRepo {
            async fn get_all(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError>;
            async fn upsert_set(&self, user_id: UserId, product_id: Uuid, quantity: u32) -> Result<(), RepositoryError>;
            async fn upsert_add(&self, user_id: UserId, product_id: Uuid, quantity: u32, stock_cap: u32) -> Result<(), RepositoryError>;
            async fn delete(&self, user_id: UserId, product_id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all(&self, user_id: UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn filled_state() -> CartState {
        let product = Product::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Drip Scale".to_string(),
            "drip-scale".to_string(),
            "0.1g resolution".to_string(),
            BigDecimal::from_str("55.00").unwrap(),
            10,
            true,
            Utc::now(),
            Utc::now(),
        );
        let mut cart = SessionCart::default();
        cart.apply_add(&product, 2, false);
        CartState {
            cart,
            merged: false,
        }
    }

    #[tokio::test]
    async fn should_empty_session_and_delete_all_rows() {
        let user_id = UserId::new(Uuid::new_v4());
        let mut items = MockCartItemRepo::new();
        items
            .expect_delete_all()
            .with(eq(user_id))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ClearCartUseCaseImpl {
            cart_item_repository: Arc::new(items),
            logger: mock_logger(),
        };

        let state = use_case
            .execute(ClearCartParams {
                user: Some(user_id),
                state: filled_state(),
            })
            .await
            .unwrap();

        assert!(state.cart.is_empty());
        assert!(state.merged);
    }

    #[tokio::test]
    async fn should_only_touch_session_for_anonymous_caller() {
        let use_case = ClearCartUseCaseImpl {
            cart_item_repository: Arc::new(MockCartItemRepo::new()),
            logger: mock_logger(),
        };

        let state = use_case
            .execute(ClearCartParams {
                user: None,
                state: filled_state(),
            })
            .await
            .unwrap();

        assert!(state.cart.is_empty());
        assert!(!state.merged);
    }
}
