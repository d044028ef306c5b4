use std::sync::Arc;

use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryPostgres;

use business::application::item::find_all::FindAllItemsUseCaseImpl;
use business::application::item::find_by_id::FindItemByIdUseCaseImpl;
use business::application::item::save::SaveItemUseCaseImpl;
use business::application::item::ship::ShipItemsUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::item::routes::ItemApi;
use crate::api::session::routes::SessionApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub session_api: SessionApi,
    pub item_api: ItemApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool));

        let find_all_use_case = Arc::new(FindAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let find_by_id_use_case = Arc::new(FindItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let save_use_case = Arc::new(SaveItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let ship_use_case = Arc::new(ShipItemsUseCaseImpl {
            repository: item_repository,
            logger,
        });

        let item_api = ItemApi::new(
            find_all_use_case,
            find_by_id_use_case,
            save_use_case,
            ship_use_case,
        );

        Self {
            health_api: HealthApi,
            session_api: SessionApi,
            item_api,
        }
    }
}
