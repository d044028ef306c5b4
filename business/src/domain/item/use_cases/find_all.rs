use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::UserId;

pub struct FindAllItemsParams {
    pub user_id: UserId,
    pub item_name: Option<String>,
    pub max_quantity: Option<i32>,
    pub max_price: Option<f64>,
}

#[async_trait]
pub trait FindAllItemsUseCase: Send + Sync {
    async fn execute(&self, params: FindAllItemsParams) -> Result<Vec<Item>, ItemError>;
}
