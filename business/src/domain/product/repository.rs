use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::query::ProductFilter;
use crate::domain::errors::RepositoryError;

use super::model::{Category, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Batched lookup for cart line enrichment. Ids without a matching
    /// product are simply absent from the result.
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
    /// Available products matching the filter, in the filter's ordering.
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Category, RepositoryError>;
}
