use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::query::ProductFilter;
use crate::domain::catalog::use_cases::list_products::{ListProductsParams, ListProductsUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{CategoryRepository, ProductRepository};

pub struct ListProductsUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, CatalogError> {
        let query = params.query;

        // A category slug that does not resolve fails the whole request.
        let category_id = match &query.category_slug {
            Some(slug) => {
                let category =
                    self.category_repository
                        .get_by_slug(slug)
                        .await
                        .map_err(|e| match e {
                            RepositoryError::NotFound => CatalogError::CategoryNotFound,
                            other => CatalogError::Repository(other),
                        })?;
                Some(category.id)
            }
            None => None,
        };

        let filter = ProductFilter {
            text: query.text,
            category_id,
            min_price: query.min_price,
            max_price: query.max_price,
            sort: query.sort,
        };

        let products = self.product_repository.search(&filter).await?;
        self.logger
            .debug(&format!("Catalog query matched {} products", products.len()));
        Ok(products)
    }
}
