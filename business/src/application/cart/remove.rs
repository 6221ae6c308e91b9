use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartState;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::merge::{MergeCartParams, MergeCartUseCase};
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct RemoveFromCartUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub merge: Arc<dyn MergeCartUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<CartState, CartError> {
        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let mut state = params.state;
        if let Some(user_id) = params.user
            && !state.merged
        {
            state = self
                .merge
                .execute(MergeCartParams { user_id, state })
                .await?;
        }

        state.cart.remove(product.id);

        if let Some(user_id) = params.user {
            self.cart_item_repository
                .delete(user_id, product.id)
                .await?;
        }

        self.logger
            .debug(&format!("Cart line removed: product {}", product.id));
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, SessionCart};
    use crate::domain::catalog::query::ProductFilter;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::UserId;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
            async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
        }
    }

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
        pub Merge {}

        #[async_trait]
        impl MergeCartUseCase for Merge {
            async fn execute(&self, params: MergeCartParams) -> Result<CartState, CartError>;
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

    fn product() -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Milk Frother".to_string(),
            "milk-frother".to_string(),
            "Handheld frother".to_string(),
            BigDecimal::from_str("15.00").unwrap(),
            10,
            true,
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_remove_line_and_stored_row_for_user() {
        let frother = product();
        let frother_clone = frother.clone();
        let user_id = UserId::new(Uuid::new_v4());

        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(frother_clone.clone()));

        let mut items = MockCartItemRepo::new();
        items
            .expect_delete()
            .with(eq(user_id), eq(frother.id))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut cart = SessionCart::default();
        cart.apply_add(&frother, 2, false);

        let use_case = RemoveFromCartUseCaseImpl {
            product_repository: Arc::new(products),
            cart_item_repository: Arc::new(items),
            merge: Arc::new(MockMerge::new()),
            logger: mock_logger(),
        };

        let state = use_case
            .execute(RemoveFromCartParams {
                user: Some(user_id),
                state: CartState { cart, merged: true },
                product_id: frother.id,
            })
            .await
            .unwrap();

        assert_eq!(state.cart.quantity_of(frother.id), 0);
    }

    #[tokio::test]
    async fn should_tolerate_removing_absent_line() {
        let frother = product();
        let frother_clone = frother.clone();
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(frother_clone.clone()));

        let use_case = RemoveFromCartUseCaseImpl {
            product_repository: Arc::new(products),
            cart_item_repository: Arc::new(MockCartItemRepo::new()),
            merge: Arc::new(MockMerge::new()),
            logger: mock_logger(),
        };

        let state = use_case
            .execute(RemoveFromCartParams {
                user: None,
                state: CartState::default(),
                product_id: frother.id,
            })
            .await
            .unwrap();

        assert!(state.cart.is_empty());
    }

    #[tokio::test]
    async fn should_report_missing_product() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = RemoveFromCartUseCaseImpl {
            product_repository: Arc::new(products),
            cart_item_repository: Arc::new(MockCartItemRepo::new()),
            merge: Arc::new(MockMerge::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFromCartParams {
                user: None,
                state: CartState::default(),
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result, Err(CartError::ProductNotFound)));
    }
}
