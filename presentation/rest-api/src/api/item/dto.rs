use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::item::model::Item;
use business::domain::item::use_cases::ship::ShipItemsResult;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SaveItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price (must be positive)
    pub price: f64,
    /// Units received (positive integer)
    pub quantity: i32,
    /// Warehouse remark
    #[oai(skip_serializing_if_is_none)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShipItemsRequest {
    /// Identifiers of the items leaving the warehouse
    pub item_ids: Vec<String>,
}

impl ShipItemsRequest {
    /// Parsed identifiers; strings that are not UUIDs cannot name a stored
    /// item and are dropped like any other unknown id.
    pub fn parsed_item_ids(&self) -> Vec<Uuid> {
        self.item_ids
            .iter()
            .filter_map(|raw| Uuid::parse_str(raw).ok())
            .collect()
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Owner (session subject) of the item
    pub owner_id: String,
    /// Item name
    pub name: String,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Units in stock
    pub quantity: i32,
    /// Unit price
    pub price: f64,
    /// Warehouse remark
    #[oai(skip_serializing_if_is_none)]
    pub remark: Option<String>,
    /// Inbound timestamp
    pub created_at: DateTime<Utc>,
    /// Last stock change
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            owner_id: item.user_id.to_string(),
            name: item.name,
            description: item.description,
            quantity: item.quantity,
            price: item.price,
            remark: item.remark,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShipItemsResponse {
    /// Items whose quantity was decremented by one
    pub update_target_ids: Vec<String>,
    /// Items removed because their last unit shipped
    pub delete_target_ids: Vec<String>,
}

impl From<ShipItemsResult> for ShipItemsResponse {
    fn from(result: ShipItemsResult) -> Self {
        Self {
            update_target_ids: result.updated_ids.iter().map(Uuid::to_string).collect(),
            delete_target_ids: result.deleted_ids.iter().map(Uuid::to_string).collect(),
        }
    }
}
