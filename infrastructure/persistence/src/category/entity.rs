use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Category;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_repository(self.id, self.name, self.slug)
    }
}
