use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::catalog::query::{CatalogQuery, ProductSort};
use business::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use business::domain::catalog::use_cases::list_products::{
    ListProductsParams, ListProductsUseCase,
};

use crate::api::catalog::dto::{CategoryResponse, ProductResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    list_products_use_case: Arc<dyn ListProductsUseCase>,
    list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
}

impl CatalogApi {
    pub fn new(
        list_products_use_case: Arc<dyn ListProductsUseCase>,
        list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
    ) -> Self {
        Self {
            list_products_use_case,
            list_categories_use_case,
        }
    }
}

fn parse_price(raw: Option<String>) -> Result<Option<BigDecimal>, Json<ErrorResponse>> {
    match raw {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "catalog.invalid_price".to_string(),
            })
        }),
    }
}

/// Catalog browsing API
///
/// Read-only listing of products and categories.
#[OpenApi]
impl CatalogApi {
    /// List products
    ///
    /// Returns available products, optionally narrowed by a text search,
    /// a category slug, and a price range. Filters combine conjunctively.
    /// `sort` accepts `price_low`, `price_high` or `name`; anything else
    /// keeps the default newest-first ordering.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn list_products(
        &self,
        q: Query<Option<String>>,
        category: Query<Option<String>>,
        min_price: Query<Option<String>>,
        max_price: Query<Option<String>>,
        sort: Query<Option<String>>,
    ) -> ListProductsResponse {
        let min_price = match parse_price(min_price.0) {
            Ok(value) => value,
            Err(json) => return ListProductsResponse::BadRequest(json),
        };
        let max_price = match parse_price(max_price.0) {
            Ok(value) => value,
            Err(json) => return ListProductsResponse::BadRequest(json),
        };

        let query = CatalogQuery {
            text: q.0.filter(|text| !text.trim().is_empty()),
            category_slug: category.0,
            min_price,
            max_price,
            sort: ProductSort::from_param(sort.0.as_deref()),
        };

        match self
            .list_products_use_case
            .execute(ListProductsParams { query })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ListProductsResponse::NotFound(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// List categories
    ///
    /// Returns every category, ordered by name.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn list_categories(&self) -> ListCategoriesResponse {
        match self.list_categories_use_case.execute().await {
            Ok(categories) => {
                let responses: Vec<CategoryResponse> =
                    categories.into_iter().map(|c| c.into()).collect();
                ListCategoriesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListCategoriesResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
