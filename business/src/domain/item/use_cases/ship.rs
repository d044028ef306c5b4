use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::shared::value_objects::UserId;

pub struct ShipItemsParams {
    pub user_id: UserId,
    pub item_ids: Vec<Uuid>,
}

/// Ids actually acted upon by a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipItemsResult {
    pub updated_ids: Vec<Uuid>,
    pub deleted_ids: Vec<Uuid>,
}

#[async_trait]
pub trait ShipItemsUseCase: Send + Sync {
    async fn execute(&self, params: ShipItemsParams) -> Result<ShipItemsResult, ItemError>;
}
