use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};
use poem::session::Session;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};

use crate::api::cart::dto::{
    AddToCartRequest, AddToCartResponse, CartConflictResponse, CartResponse, ClearCartResponse,
    RemoveFromCartResponse, UpdateQuantityRequest, UpdateQuantityResponse,
};
use crate::api::cart::error_mapper::quantity_limit_message;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::{current_user, load_cart_state, store_cart_state};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    update_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        update_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            update_use_case,
            remove_use_case,
            clear_use_case,
        }
    }
}

fn parse_product_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| {
        Json(ErrorResponse {
            name: "ValidationError".to_string(),
            message: "cart.invalid_product_id".to_string(),
        })
    })
}

/// Session cart API
///
/// The cart lives in the session cookie; authenticated requests also keep
/// a stored copy per user. Every mutation writes the updated state back to
/// the session.
#[OpenApi]
impl CartApi {
    /// Get the cart detail
    ///
    /// Returns the cart lines enriched with live product data, plus totals.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, session: &Session) -> GetCartResponse {
        let params = GetCartParams {
            user: current_user(session),
            state: load_cart_state(session),
        };

        match self.get_use_case.execute(params).await {
            Ok(snapshot) => {
                store_cart_state(session, &snapshot.state);
                GetCartResponse::Ok(Json(snapshot.view.into()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the cart
    ///
    /// Increments the line (or replaces it when `override` is set). The
    /// resulting quantity is silently clamped to the per-line maximum and
    /// the product's stock, except that a request above stock is rejected.
    #[oai(path = "/cart/add/:product_id", method = "post", tag = "ApiTags::Cart")]
    async fn add_to_cart(
        &self,
        session: &Session,
        product_id: Path<String>,
        body: Json<AddToCartRequest>,
    ) -> AddResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return AddResponse::BadRequest(json),
        };

        let params = AddToCartParams {
            user: current_user(session),
            state: load_cart_state(session),
            product_id,
            quantity: body.0.quantity,
            override_quantity: body.0.override_quantity,
        };

        match self.add_use_case.execute(params).await {
            Ok(mutation) => {
                store_cart_state(session, &mutation.state);
                AddResponse::Ok(Json(AddToCartResponse {
                    cart_count: mutation.state.cart.unique_count(),
                }))
            }
            Err(err) => {
                if let Some(message) = quantity_limit_message(&err) {
                    return AddResponse::Conflict(Json(CartConflictResponse {
                        success: false,
                        error: message,
                    }));
                }
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddResponse::NotFound(json),
                    _ => AddResponse::InternalError(json),
                }
            }
        }
    }

    /// Adjust a line quantity by one step
    ///
    /// `action` is `increase` or `decrease`. Stepping above the per-line
    /// maximum or the stock, or below one, is rejected with a conflict.
    #[oai(
        path = "/cart/update/:product_id",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn update_quantity(
        &self,
        session: &Session,
        product_id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> UpdateResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return UpdateResponse::BadRequest(json),
        };

        let params = UpdateCartQuantityParams {
            user: current_user(session),
            state: load_cart_state(session),
            product_id,
            action: body.0.action.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(mutation) => {
                store_cart_state(session, &mutation.state);
                let item_total = mutation
                    .state
                    .cart
                    .line_total(product_id)
                    .unwrap_or_else(BigDecimal::zero);
                UpdateResponse::Ok(Json(UpdateQuantityResponse {
                    success: true,
                    quantity: mutation.quantity,
                    item_total: item_total.to_string(),
                    cart_total: mutation.state.cart.total_price().to_string(),
                    cart_count: mutation.state.cart.unique_count(),
                }))
            }
            Err(err) => {
                if let Some(message) = quantity_limit_message(&err) {
                    return UpdateResponse::Conflict(Json(CartConflictResponse {
                        success: false,
                        error: message,
                    }));
                }
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateResponse::NotFound(json),
                    _ => UpdateResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the cart
    ///
    /// Removing a product that is not in the cart succeeds and leaves the
    /// cart untouched.
    #[oai(
        path = "/cart/remove/:product_id",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn remove_from_cart(
        &self,
        session: &Session,
        product_id: Path<String>,
    ) -> RemoveResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return RemoveResponse::BadRequest(json),
        };

        let params = RemoveFromCartParams {
            user: current_user(session),
            state: load_cart_state(session),
            product_id,
        };

        match self.remove_use_case.execute(params).await {
            Ok(state) => {
                store_cart_state(session, &state);
                RemoveResponse::Ok(Json(RemoveFromCartResponse {
                    success: true,
                    cart_count: state.cart.unique_count(),
                    cart_total: state.cart.total_price().to_string(),
                }))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveResponse::NotFound(json),
                    _ => RemoveResponse::InternalError(json),
                }
            }
        }
    }

    /// Empty the cart
    ///
    /// Drops every line, and for authenticated users also the stored rows.
    #[oai(path = "/cart/clear", method = "post", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, session: &Session) -> ClearResponse {
        let params = ClearCartParams {
            user: current_user(session),
            state: load_cart_state(session),
        };

        match self.clear_use_case.execute(params).await {
            Ok(state) => {
                store_cart_state(session, &state);
                ClearResponse::Ok(Json(ClearCartResponse {
                    success: true,
                    cart_count: 0,
                    cart_total: BigDecimal::zero().to_string(),
                }))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddResponse {
    #[oai(status = 200)]
    Ok(Json<AddToCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<CartConflictResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateResponse {
    #[oai(status = 200)]
    Ok(Json<UpdateQuantityResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<CartConflictResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveResponse {
    #[oai(status = 200)]
    Ok(Json<RemoveFromCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearResponse {
    #[oai(status = 200)]
    Ok(Json<ClearCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
