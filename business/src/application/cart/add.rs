use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartItemRepository;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase, CartMutation};
use crate::domain::cart::use_cases::merge::{MergeCartParams, MergeCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddToCartUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub cart_item_repository: Arc<dyn CartItemRepository>,
    pub merge: Arc<dyn MergeCartUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<CartMutation, CartError> {
        // A zero line is never admitted: the stored rows require a positive
        // quantity and a zero session line would be unremovable dead weight.
        if params.quantity == 0 {
            return Err(CartError::QuantityBelowMinimum);
        }

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if product.stock < params.quantity {
            return Err(CartError::InsufficientStock {
                available: product.stock,
            });
        }

        let mut state = params.state;
        if let Some(user_id) = params.user
            && !state.merged
        {
            state = self
                .merge
                .execute(MergeCartParams { user_id, state })
                .await?;
        }

        let quantity = state
            .cart
            .apply_add(&product, params.quantity, params.override_quantity);

        if let Some(user_id) = params.user {
            self.cart_item_repository
                .upsert_set(user_id, product.id, quantity)
                .await?;
        }

        self.logger.debug(&format!(
            "Cart line set: product {} quantity {quantity}",
            product.id
        ));
        Ok(CartMutation { state, quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, CartState};
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

    fn product(stock: u32) -> Product {
        Product::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Pour Over Kettle".to_string(),
            "pour-over-kettle".to_string(),
            "Gooseneck, 1L".to_string(),
            BigDecimal::from_str("39.90").unwrap(),
            stock,
            true,
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_add_anonymously_without_touching_the_store() {
        let kettle = product(12);
        let kettle_clone = kettle.clone();
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(kettle_clone.clone()));
        let items = MockCartItemRepo::new();

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(products),
            cart_item_repository: Arc::new(items),
            merge: Arc::new(MockMerge::new()),
            logger: mock_logger(),
        };

        let mutation = use_case
            .execute(AddToCartParams {
                user: None,
                state: CartState::default(),
                product_id: kettle.id,
                quantity: 2,
                override_quantity: false,
            })
            .await
            .unwrap();

        assert_eq!(mutation.quantity, 2);
        assert_eq!(mutation.state.cart.quantity_of(kettle.id), 2);
        assert!(!mutation.state.merged);
    }

    #[tokio::test]
    async fn should_merge_then_upsert_clamped_quantity_for_user() {
        let kettle = product(12);
        let kettle_clone = kettle.clone();
        let user_id = UserId::new(Uuid::new_v4());

        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(kettle_clone.clone()));

        let mut items = MockCartItemRepo::new();
        items
            .expect_upsert_set()
            .with(eq(user_id), eq(kettle.id), eq(10u32))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut merge = MockMerge::new();
        merge.expect_execute().times(1).returning(|params| {
            let mut state = params.state;
            state.merged = true;
            Ok(state)
        });

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(products),
            cart_item_repository: Arc::new(items),
            merge: Arc::new(merge),
            logger: mock_logger(),
        };

        // 11 requested, stock 12: the line maximum of 10 wins.
        let mutation = use_case
            .execute(AddToCartParams {
                user: Some(user_id),
                state: CartState::default(),
                product_id: kettle.id,
                quantity: 11,
                override_quantity: false,
            })
            .await
            .unwrap();

        assert_eq!(mutation.quantity, 10);
        assert!(mutation.state.merged);
    }

    #[tokio::test]
    async fn should_reject_quantity_above_stock() {
        let kettle = product(3);
        let kettle_clone = kettle.clone();
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(move |_| Ok(kettle_clone.clone()));

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(products),
            cart_item_repository: Arc::new(MockCartItemRepo::new()),
            merge: Arc::new(MockMerge::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                user: None,
                state: CartState::default(),
                product_id: kettle.id,
                quantity: 4,
                override_quantity: false,
            })
            .await;

        assert!(matches!(
            result,
            Err(CartError::InsufficientStock { available: 3 })
        ));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_before_any_lookup() {
        // No expectations on any mock: a repository or merge call would panic.
        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(MockProductRepo::new()),
            cart_item_repository: Arc::new(MockCartItemRepo::new()),
            merge: Arc::new(MockMerge::new()),
            logger: mock_logger(),
        };

        let user_id = UserId::new(Uuid::new_v4());
        let result = use_case
            .execute(AddToCartParams {
                user: Some(user_id),
                state: CartState::default(),
                product_id: Uuid::new_v4(),
                quantity: 0,
                override_quantity: true,
            })
            .await;

        assert!(matches!(result, Err(CartError::QuantityBelowMinimum)));
    }

    #[tokio::test]
    async fn should_report_missing_product() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddToCartUseCaseImpl {
            product_repository: Arc::new(products),
            cart_item_repository: Arc::new(MockCartItemRepo::new()),
            merge: Arc::new(MockMerge::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                user: None,
                state: CartState::default(),
                product_id: Uuid::new_v4(),
                quantity: 1,
                override_quantity: false,
            })
            .await;

        assert!(matches!(result, Err(CartError::ProductNotFound)));
    }
}
