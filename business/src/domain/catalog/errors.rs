#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.category_not_found")]
    CategoryNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
