use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartItemRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartItemEntity;

pub struct CartItemRepositoryPostgres {
    pool: PgPool,
}

impl CartItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn as_db_quantity(quantity: u32) -> i32 {
    i32::try_from(quantity).unwrap_or(i32::MAX)
}

#[async_trait]
impl CartItemRepository for CartItemRepositoryPostgres {
    async fn get_all(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartItemEntity>(
            "SELECT user_id, product_id, quantity, added_at FROM cart_items WHERE user_id = $1 ORDER BY added_at ASC",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn upsert_set(
        &self,
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_items (user_id, product_id, quantity, added_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id, product_id) DO UPDATE SET
                quantity = EXCLUDED.quantity"#,
        )
        .bind(user_id.as_uuid())
        .bind(product_id)
        .bind(as_db_quantity(quantity))
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn upsert_add(
        &self,
        user_id: UserId,
        product_id: Uuid,
        quantity: u32,
        stock_cap: u32,
    ) -> Result<(), RepositoryError> {
        // Single-statement additive upsert: the read-modify-write clamp
        // happens inside the database, safe under concurrent writers.
        sqlx::query(
            r#"INSERT INTO cart_items (user_id, product_id, quantity, added_at)
            VALUES ($1, $2, LEAST($3, $4), NOW())
            ON CONFLICT (user_id, product_id) DO UPDATE SET
                quantity = LEAST(cart_items.quantity + $3, $4)"#,
        )
        .bind(user_id.as_uuid())
        .bind(product_id)
        .bind(as_db_quantity(quantity))
        .bind(as_db_quantity(stock_cap))
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, user_id: UserId, product_id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
            .bind(user_id.as_uuid())
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete_all(&self, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
