use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartItem;

#[async_trait]
pub trait CartItemRepository: Send + Sync {
    async fn get_all(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError>;
    /// Inserts the row or overwrites its quantity, in one statement.
    async fn upsert_set(
        &self,
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<(), RepositoryError>;
    /// Inserts the row or adds to the existing quantity, clamped to
    /// `stock_cap`, in one statement.
    async fn upsert_add(
        &self,
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
        stock_cap: u32,
    ) -> Result<(), RepositoryError>;
    async fn delete(&self, user_id: UserId, product_id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_all(&self, user_id: UserId) -> Result<(), RepositoryError>;
}
