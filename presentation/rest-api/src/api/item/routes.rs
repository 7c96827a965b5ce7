use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::patch::{PatchItemParams, PatchItemUseCase};
use business::domain::item::use_cases::replace::{ReplaceItemParams, ReplaceItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_request};
use crate::api::item::dto::{ItemRequest, ItemResponse, PatchItemRequest};
use crate::api::params::parse_bool;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    replace_use_case: Arc<dyn ReplaceItemUseCase>,
    patch_use_case: Arc<dyn PatchItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        replace_use_case: Arc<dyn ReplaceItemUseCase>,
        patch_use_case: Arc<dyn PatchItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            get_all_use_case,
            replace_use_case,
            patch_use_case,
            delete_use_case,
        }
    }
}

/// Item catalogue API
///
/// Endpoints for creating, reading, updating and soft-deleting items.
#[OpenApi]
impl ItemApi {
    /// Create an item
    ///
    /// Stores a new item under the next sequential id.
    #[oai(path = "/item", method = "post", tag = "ApiTags::Items")]
    async fn create(&self, body: Json<ItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            name: body.0.name,
            price: body.0.price,
            deleted: body.0.deleted,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => CreateItemResponse::UnprocessableEntity(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item by ID
    ///
    /// Soft-deleted items are reported as missing.
    #[oai(path = "/item/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_by_id(&self, id: Path<u64>) -> GetItemResponse {
        match self
            .get_by_id_use_case
            .execute(GetItemByIdParams { id: id.0 })
            .await
        {
            Ok(item) => GetItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemResponse::NotFound(json),
                    _ => GetItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List items
    ///
    /// Filters by price range and deletion visibility, then returns the
    /// `[offset, offset + limit)` slice in creation order.
    #[oai(path = "/item", method = "get", tag = "ApiTags::Items")]
    async fn get_all(
        &self,
        /// Number of matching items to skip (default: 0)
        offset: Query<Option<i64>>,
        /// Maximum number of items to return (default: 10)
        limit: Query<Option<i64>>,
        /// Inclusive lower price bound
        min_price: Query<Option<f64>>,
        /// Inclusive upper price bound
        max_price: Query<Option<f64>>,
        /// Include soft-deleted items (default: false). Accepts `true`/`false`,
        /// `1`/`0`, `yes`/`no` and `on`/`off` in any case.
        show_deleted: Query<Option<String>>,
    ) -> GetAllItemsResponse {
        let show_deleted = match show_deleted.0.as_deref().map(parse_bool) {
            None => false,
            Some(Some(flag)) => flag,
            Some(None) => {
                return GetAllItemsResponse::UnprocessableEntity(Json(ErrorResponse::new(
                    "ValidationError",
                    "query.show_deleted_invalid",
                )));
            }
        };

        let params = GetAllItemsParams {
            offset: offset.0,
            limit: limit.0,
            min_price: min_price.0,
            max_price: max_price.0,
            show_deleted,
        };

        match self.get_all_use_case.execute(params).await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetAllItemsResponse::UnprocessableEntity(json),
                    _ => GetAllItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace an item
    ///
    /// Overwrites every field of a live item, including its deleted flag.
    #[oai(path = "/item/:id", method = "put", tag = "ApiTags::Items")]
    async fn replace(&self, id: Path<u64>, body: Json<ItemRequest>) -> ReplaceItemResponse {
        let params = ReplaceItemParams {
            id: id.0,
            name: body.0.name,
            price: body.0.price,
            deleted: body.0.deleted,
        };

        match self.replace_use_case.execute(params).await {
            Ok(item) => ReplaceItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ReplaceItemResponse::NotFound(json),
                    422 => ReplaceItemResponse::UnprocessableEntity(json),
                    _ => ReplaceItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Patch an item
    ///
    /// Updates only the given fields of a live item. Missing or soft-deleted
    /// items answer 304 Not Modified; unknown fields are rejected with 422.
    #[oai(path = "/item/:id", method = "patch", tag = "ApiTags::Items")]
    async fn patch(&self, id: Path<u64>, body: Json<PatchItemRequest>) -> PatchItemResponse {
        let params = PatchItemParams {
            id: id.0,
            name: body.0.name,
            price: body.0.price,
        };

        match self.patch_use_case.execute(params).await {
            Ok(item) => PatchItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => PatchItemResponse::NotModified,
                    422 => PatchItemResponse::UnprocessableEntity(json),
                    _ => PatchItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Marks the item as deleted and returns it. Deleting twice is allowed.
    #[oai(path = "/item/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, id: Path<u64>) -> DeleteItemResponse {
        match self
            .delete_use_case
            .execute(DeleteItemParams { id: id.0 })
            .await
        {
            Ok(item) => DeleteItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_item_bad_request")]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn create_item_bad_request(err: poem::Error) -> CreateItemResponse {
    CreateItemResponse::UnprocessableEntity(invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_item_bad_request")]
pub enum GetItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_item_bad_request(err: poem::Error) -> GetItemResponse {
    GetItemResponse::UnprocessableEntity(invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_all_items_bad_request")]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn get_all_items_bad_request(err: poem::Error) -> GetAllItemsResponse {
    GetAllItemsResponse::UnprocessableEntity(invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "replace_item_bad_request")]
pub enum ReplaceItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn replace_item_bad_request(err: poem::Error) -> ReplaceItemResponse {
    ReplaceItemResponse::UnprocessableEntity(invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "patch_item_bad_request")]
pub enum PatchItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 304)]
    NotModified,
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn patch_item_bad_request(err: poem::Error) -> PatchItemResponse {
    PatchItemResponse::UnprocessableEntity(invalid_request(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_item_bad_request")]
pub enum DeleteItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn delete_item_bad_request(err: poem::Error) -> DeleteItemResponse {
    DeleteItemResponse::UnprocessableEntity(invalid_request(&err))
}
