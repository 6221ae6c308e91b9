use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::query::CatalogQuery;
use crate::domain::product::model::Product;

pub struct ListProductsParams {
    pub query: CatalogQuery,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, CatalogError>;
}
