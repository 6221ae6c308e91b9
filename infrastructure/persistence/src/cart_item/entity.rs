use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::CartItem;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            UserId::new(self.user_id),
            self.product_id,
            u32::try_from(self.quantity).unwrap_or(0),
            self.added_at,
        )
    }
}
