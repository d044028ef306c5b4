use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItemProps};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::save::{SaveItemParams, SaveItemUseCase};
use crate::domain::logger::Logger;

pub struct SaveItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveItemUseCase for SaveItemUseCaseImpl {
    async fn execute(&self, params: SaveItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Receiving item: {} (quantity {})",
            params.name, params.quantity
        ));

        let item = Item::new(NewItemProps {
            user_id: params.user_id,
            name: params.name,
            description: params.description,
            quantity: params.quantity,
            price: params.price,
            remark: params.remark,
        })?;

        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Item received with id: {}", item.id));
        Ok(item)
    }
}
