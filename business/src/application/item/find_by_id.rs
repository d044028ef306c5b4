use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::find_by_id::{FindItemByIdParams, FindItemByIdUseCase};
use crate::domain::logger::Logger;

pub struct FindItemByIdUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindItemByIdUseCase for FindItemByIdUseCaseImpl {
    async fn execute(&self, params: FindItemByIdParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Fetching item by id: {}", params.id));

        let item = self
            .repository
            .find_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        Ok(item)
    }
}
