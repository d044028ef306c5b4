use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::UserId;

pub struct FindItemByIdParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait FindItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: FindItemByIdParams) -> Result<Item, ItemError>;
}
