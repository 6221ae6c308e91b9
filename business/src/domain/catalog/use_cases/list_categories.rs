use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::product::model::Category;

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, CatalogError>;
}
