use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::item::use_cases::find_all::{FindAllItemsParams, FindAllItemsUseCase};
use business::domain::item::use_cases::find_by_id::{FindItemByIdParams, FindItemByIdUseCase};
use business::domain::item::use_cases::save::{SaveItemParams, SaveItemUseCase};
use business::domain::item::use_cases::ship::{ShipItemsParams, ShipItemsUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ItemResponse, SaveItemRequest, ShipItemsRequest, ShipItemsResponse};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    find_all_use_case: Arc<dyn FindAllItemsUseCase>,
    find_by_id_use_case: Arc<dyn FindItemByIdUseCase>,
    save_use_case: Arc<dyn SaveItemUseCase>,
    ship_use_case: Arc<dyn ShipItemsUseCase>,
}

impl ItemApi {
    pub fn new(
        find_all_use_case: Arc<dyn FindAllItemsUseCase>,
        find_by_id_use_case: Arc<dyn FindItemByIdUseCase>,
        save_use_case: Arc<dyn SaveItemUseCase>,
        ship_use_case: Arc<dyn ShipItemsUseCase>,
    ) -> Self {
        Self {
            find_all_use_case,
            find_by_id_use_case,
            save_use_case,
            ship_use_case,
        }
    }
}

/// Inventory API
///
/// Inbound, search and outbound of warehouse stock. Every endpoint only
/// sees the items of the authenticated owner.
#[OpenApi]
impl ItemApi {
    /// Search items
    ///
    /// Lists the caller's items, newest first. When several filters are
    /// given an item is returned if it matches any one of them.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn find_all(
        &self,
        auth: SessionBearer,
        /// Substring of the item name (case-sensitive)
        #[oai(name = "itemName")]
        item_name: Query<Option<String>>,
        /// Inclusive quantity ceiling
        #[oai(name = "maxQuantity")]
        max_quantity: Query<Option<i32>>,
        /// Inclusive price ceiling
        #[oai(name = "maxPrice")]
        max_price: Query<Option<f64>>,
    ) -> FindAllItemsResponse {
        let params = FindAllItemsParams {
            user_id: auth.0,
            item_name: item_name.0,
            max_quantity: max_quantity.0,
            max_price: max_price.0,
        };

        match self.find_all_use_case.execute(params).await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                FindAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FindAllItemsResponse::BadRequest(json),
                    _ => FindAllItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item by ID
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn find_by_id(&self, auth: SessionBearer, id: Path<String>) -> FindItemByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return FindItemByIdResponse::BadRequest(Json(ErrorResponse::validation(
                    "id",
                    "item.invalid_id",
                )));
            }
        };

        match self
            .find_by_id_use_case
            .execute(FindItemByIdParams {
                id: uuid,
                user_id: auth.0,
            })
            .await
        {
            Ok(item) => FindItemByIdResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => FindItemByIdResponse::NotFound(json),
                    _ => FindItemByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Register inbound stock
    ///
    /// Creates a new item owned by the caller. Items may share a name.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn save(&self, auth: SessionBearer, body: Json<SaveItemRequest>) -> SaveItemResponse {
        let params = SaveItemParams {
            user_id: auth.0,
            name: body.0.name,
            description: body.0.description,
            price: body.0.price,
            quantity: body.0.quantity,
            remark: body.0.remark,
        };

        match self.save_use_case.execute(params).await {
            Ok(item) => SaveItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SaveItemResponse::BadRequest(json),
                    _ => SaveItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Ship items out
    ///
    /// Takes one unit of each selected item out of stock. Items with more
    /// than one unit are decremented, the others are removed. Unknown ids
    /// are ignored.
    #[oai(path = "/items/ship", method = "post", tag = "ApiTags::Items")]
    async fn ship(&self, auth: SessionBearer, body: Json<ShipItemsRequest>) -> ShipItemsApiResponse {
        let params = ShipItemsParams {
            user_id: auth.0,
            item_ids: body.0.parsed_item_ids(),
        };

        match self.ship_use_case.execute(params).await {
            Ok(result) => ShipItemsApiResponse::Ok(Json(result.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ShipItemsApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindItemByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SaveItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ShipItemsApiResponse {
    #[oai(status = 200)]
    Ok(Json<ShipItemsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
