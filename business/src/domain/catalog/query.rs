use bigdecimal::BigDecimal;
use uuid::Uuid;

/// Ordering applied to catalog listings. Unrecognized keywords fall back
/// to the default newest-first ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Name,
}

impl ProductSort {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("price_low") => ProductSort::PriceLow,
            Some("price_high") => ProductSort::PriceHigh,
            Some("name") => ProductSort::Name,
            _ => ProductSort::Newest,
        }
    }
}

/// Caller-facing catalog query. Filters combine conjunctively; the category
/// is referenced by slug and resolved before hitting the product store.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub text: Option<String>,
    pub category_slug: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub sort: ProductSort,
}

/// Repository-level filter with the category slug already resolved.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub text: Option<String>,
    pub category_id: Option<Uuid>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub sort: ProductSort,
}
