#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.insufficient_stock")]
    InsufficientStock { available: u32 },
    #[error("cart.quantity_above_maximum")]
    QuantityAboveMaximum,
    #[error("cart.quantity_below_minimum")]
    QuantityBelowMinimum,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
