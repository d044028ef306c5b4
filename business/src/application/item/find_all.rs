use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::filter::ItemFilter;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::find_all::{FindAllItemsParams, FindAllItemsUseCase};
use crate::domain::logger::Logger;

pub struct FindAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindAllItemsUseCase for FindAllItemsUseCaseImpl {
    async fn execute(&self, params: FindAllItemsParams) -> Result<Vec<Item>, ItemError> {
        let filter = ItemFilter::new(params.item_name, params.max_quantity, params.max_price)?;
        self.logger
            .info(&format!("Searching items with filter: {:?}", filter));

        let items = self.repository.find_all(&params.user_id, &filter).await?;

        self.logger.info(&format!("Found {} items", items.len()));
        Ok(items)
    }
}
