use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::UserId;

pub struct SaveItemParams {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub remark: Option<String>,
}

#[async_trait]
pub trait SaveItemUseCase: Send + Sync {
    async fn execute(&self, params: SaveItemParams) -> Result<Item, ItemError>;
}
