use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::cart::use_cases::add_item::{AddItemToCartParams, AddItemToCartUseCase};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_all::{GetAllCartsParams, GetAllCartsUseCase};
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};

use crate::api::cart::dto::{CartCreatedResponse, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_request};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    get_all_use_case: Arc<dyn GetAllCartsUseCase>,
    add_item_use_case: Arc<dyn AddItemToCartUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        get_all_use_case: Arc<dyn GetAllCartsUseCase>,
        add_item_use_case: Arc<dyn AddItemToCartUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            get_all_use_case,
            add_item_use_case,
        }
    }
}

/// Cart API
///
/// Endpoints for creating carts, listing them and adding items.
#[OpenApi]
impl CartApi {
    /// Create a cart
    ///
    /// Creates an empty cart and points the `location` header at it.
    #[oai(path = "/cart", method = "post", tag = "ApiTags::Carts")]
    async fn create(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => CreateCartResponse::Created(
                Json(CartCreatedResponse { id: cart.id }),
                format!("/cart/{}", cart.id),
            ),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart by ID
    #[oai(path = "/cart/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_by_id(&self, id: Path<u64>) -> GetCartResponse {
        match self
            .get_by_id_use_case
            .execute(GetCartByIdParams { id: id.0 })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// List carts
    ///
    /// Takes the `[offset, offset + limit)` window over all carts in creation
    /// order, then drops the carts outside the price and quantity bounds.
    /// Price bounds are inclusive, quantity bounds are exclusive.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Carts")]
    async fn get_all(
        &self,
        /// Number of carts to skip (default: 0)
        offset: Query<Option<i64>>,
        /// Size of the window (default: 10)
        limit: Query<Option<i64>>,
        /// Inclusive lower bound on the cart total
        min_price: Query<Option<f64>>,
        /// Inclusive upper bound on the cart total
        max_price: Query<Option<f64>>,
        /// Cart must hold more units than this
        min_quantity: Query<Option<i64>>,
        /// Cart must hold fewer units than this
        max_quantity: Query<Option<i64>>,
    ) -> GetAllCartsResponse {
        let params = GetAllCartsParams {
            offset: offset.0,
            limit: limit.0,
            min_price: min_price.0,
            max_price: max_price.0,
            min_quantity: min_quantity.0,
            max_quantity: max_quantity.0,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(carts) => {
                let responses: Vec<CartResponse> = carts.into_iter().map(|c| c.into()).collect();
                GetAllCartsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetAllCartsResponse::UnprocessableEntity(json),
                    _ => GetAllCartsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item to a cart
    ///
    /// Adds one unit of a live item. Repeated additions bump the quantity of
    /// the existing line.
    #[oai(
        path = "/cart/:cart_id/add/:item_id",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_item(&self, cart_id: Path<u64>, item_id: Path<u64>) -> AddItemToCartResponse {
        let params = AddItemToCartParams {
            cart_id: cart_id.0,
            item_id: item_id.0,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => AddItemToCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddItemToCartResponse::NotFound(json),
                    _ => AddItemToCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(
        Json<CartCreatedResponse>,
        #[oai(header = "location")] String,
    ),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_cart_bad_request")]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_cart_bad_request(err: poem::Error) -> GetCartResponse {
    GetCartResponse::UnprocessableEntity(invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_all_carts_bad_request")]
pub enum GetAllCartsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartResponse>>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_all_carts_bad_request(err: poem::Error) -> GetAllCartsResponse {
    GetAllCartsResponse::UnprocessableEntity(invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "add_item_bad_request")]
pub enum AddItemToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn add_item_bad_request(err: poem::Error) -> AddItemToCartResponse {
    AddItemToCartResponse::UnprocessableEntity(invalid_request(&err))
}
