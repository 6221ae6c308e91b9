use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Product grouping, resolved by slug in catalog queries.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn from_repository(id: Uuid, name: String, slug: String) -> Self {
        Self { id, name, slug }
    }
}

/// Catalog product. Owned by the persistence store; this service only
/// reads it (catalog listings, cart lookups).
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: BigDecimal,
    pub stock: u32,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        category_id: Uuid,
        name: String,
        slug: String,
        description: String,
        price: BigDecimal,
        stock: u32,
        available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            category_id,
            name,
            slug,
            description,
            price,
            stock,
            available,
            created_at,
            updated_at,
        }
    }
}
