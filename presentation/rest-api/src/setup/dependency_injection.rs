use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart_item::repository::CartItemRepositoryPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::account::login::LoginUseCaseImpl;
use business::application::account::register::RegisterUseCaseImpl;
use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::merge::MergeCartUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
use business::application::catalog::list_products::ListProductsUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub account_api: crate::api::account::routes::AccountApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let cart_item_repository = Arc::new(CartItemRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));

        // Catalog use cases
        let list_products_use_case = Arc::new(ListProductsUseCaseImpl {
            product_repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let list_categories_use_case = Arc::new(ListCategoriesUseCaseImpl {
            repository: category_repository,
            logger: logger.clone(),
        });

        // Cart use cases; merge is shared by every cart operation
        let merge_use_case = Arc::new(MergeCartUseCaseImpl {
            product_repository: product_repository.clone(),
            cart_item_repository: cart_item_repository.clone(),
            logger: logger.clone(),
        });
        let add_use_case = Arc::new(AddToCartUseCaseImpl {
            product_repository: product_repository.clone(),
            cart_item_repository: cart_item_repository.clone(),
            merge: merge_use_case.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            product_repository: product_repository.clone(),
            add: add_use_case.clone(),
            merge: merge_use_case.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            product_repository: product_repository.clone(),
            cart_item_repository: cart_item_repository.clone(),
            merge: merge_use_case.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            cart_item_repository,
            logger: logger.clone(),
        });
        let get_use_case = Arc::new(GetCartUseCaseImpl {
            product_repository,
            merge: merge_use_case,
            logger: logger.clone(),
        });

        // Account use cases
        let register_use_case = Arc::new(RegisterUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            list_products_use_case,
            list_categories_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_use_case,
            add_use_case,
            update_use_case,
            remove_use_case,
            clear_use_case,
        );

        let account_api =
            crate::api::account::routes::AccountApi::new(register_use_case, login_use_case);

        Self {
            health_api,
            catalog_api,
            cart_api,
            account_api,
        }
    }
}
