use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::shipment::ShipmentPlan;
use crate::domain::item::use_cases::ship::{ShipItemsParams, ShipItemsResult, ShipItemsUseCase};
use crate::domain::logger::Logger;

pub struct ShipItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ShipItemsUseCase for ShipItemsUseCaseImpl {
    async fn execute(&self, params: ShipItemsParams) -> Result<ShipItemsResult, ItemError> {
        let mut seen = HashSet::new();
        let mut item_ids = params.item_ids;
        item_ids.retain(|id| seen.insert(*id));

        if item_ids.is_empty() {
            self.logger.debug("Nothing to ship");
            return Ok(ShipItemsResult::default());
        }

        self.logger
            .info(&format!("Shipping {} items", item_ids.len()));

        let items = self
            .repository
            .find_by_ids(&item_ids, &params.user_id)
            .await?;
        if items.len() < item_ids.len() {
            self.logger.warn(&format!(
                "Skipping {} unknown items",
                item_ids.len() - items.len()
            ));
        }

        let plan = ShipmentPlan::from_items(&items);
        if plan.is_empty() {
            return Ok(ShipItemsResult::default());
        }

        let applied = match self
            .repository
            .apply_shipment(&plan, &params.user_id)
            .await
        {
            Ok(applied) => applied,
            Err(e) => {
                self.logger
                    .error(&format!("Shipment failed for user {}: {}", params.user_id, e));
                return Err(e.into());
            }
        };

        if applied != plan {
            self.logger.warn(&format!(
                "Skipped {} items changed since they were loaded",
                plan.decrement_ids.len() + plan.delete_ids.len()
                    - applied.decrement_ids.len()
                    - applied.delete_ids.len()
            ));
        }

        self.logger.info(&format!(
            "Shipped: {} decremented, {} removed",
            applied.decrement_ids.len(),
            applied.delete_ids.len()
        ));
        Ok(ShipItemsResult {
            updated_ids: applied.decrement_ids,
            deleted_ids: applied.delete_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::item::find_by_id::FindItemByIdUseCaseImpl;
    use crate::application::item::in_memory::InMemoryItemRepository;
    use crate::application::item::save::SaveItemUseCaseImpl;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::filter::ItemFilter;
    use crate::domain::item::model::Item;
    use crate::domain::item::use_cases::find_by_id::{FindItemByIdParams, FindItemByIdUseCase};
    use crate::domain::item::use_cases::save::{SaveItemParams, SaveItemUseCase};
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn find_all(&self, user_id: &UserId, filter: &ItemFilter) -> Result<Vec<Item>, RepositoryError>;
            async fn find_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Item, RepositoryError>;
            async fn find_by_ids(&self, ids: &[Uuid], user_id: &UserId) -> Result<Vec<Item>, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn apply_shipment(&self, plan: &ShipmentPlan, user_id: &UserId) -> Result<ShipmentPlan, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    fn stored_item(id: Uuid, quantity: i32) -> Item {
        let now = Utc::now();
        Item::from_repository(
            id,
            test_user_id(),
            "Cloth".to_string(),
            None,
            quantity,
            28000.0,
            None,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_not_touch_repository_when_no_ids() {
        let mock_repo = MockItemRepo::new();

        let use_case = ShipItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ShipItemsParams {
                user_id: test_user_id(),
                item_ids: vec![],
            })
            .await;

        assert_eq!(result.unwrap(), ShipItemsResult::default());
    }

    #[tokio::test]
    async fn should_split_loaded_items_by_quantity() {
        let plenty = Uuid::new_v4();
        let last_one = Uuid::new_v4();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_ids()
            .returning(move |_, _| Ok(vec![stored_item(plenty, 4), stored_item(last_one, 1)]));
        mock_repo
            .expect_apply_shipment()
            .withf(move |plan, user_id| {
                plan.decrement_ids == vec![plenty]
                    && plan.delete_ids == vec![last_one]
                    && *user_id == test_user_id()
            })
            .times(1)
            .returning(|plan, _| Ok(plan.clone()));

        let use_case = ShipItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ShipItemsParams {
                user_id: test_user_id(),
                item_ids: vec![plenty, last_one],
            })
            .await
            .unwrap();

        assert_eq!(result.updated_ids, vec![plenty]);
        assert_eq!(result.deleted_ids, vec![last_one]);
    }

    #[tokio::test]
    async fn should_deduplicate_ids_before_loading() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_ids()
            .withf(move |ids, _| ids.len() == 1 && ids[0] == id)
            .returning(move |_, _| Ok(vec![stored_item(id, 2)]));
        mock_repo
            .expect_apply_shipment()
            .returning(|plan, _| Ok(plan.clone()));

        let use_case = ShipItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ShipItemsParams {
                user_id: test_user_id(),
                item_ids: vec![id, id, id],
            })
            .await
            .unwrap();

        assert_eq!(result.updated_ids, vec![id]);
    }

    #[tokio::test]
    async fn should_omit_unknown_ids_from_both_sets() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_find_by_ids().returning(|_, _| Ok(vec![]));

        let use_case = ShipItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ShipItemsParams {
                user_id: test_user_id(),
                item_ids: vec![Uuid::new_v4()],
            })
            .await
            .unwrap();

        assert!(result.updated_ids.is_empty());
        assert!(result.deleted_ids.is_empty());
    }

    #[tokio::test]
    async fn should_fail_when_bulk_operation_fails() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_ids()
            .returning(move |_, _| Ok(vec![stored_item(id, 1)]));
        mock_repo
            .expect_apply_shipment()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = ShipItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ShipItemsParams {
                user_id: test_user_id(),
                item_ids: vec![id],
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_decrement_cloth_twice_then_remove_it() {
        let repository = Arc::new(InMemoryItemRepository::default());
        let save = SaveItemUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let find = FindItemByIdUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };
        let ship = ShipItemsUseCaseImpl {
            repository,
            logger: mock_logger(),
        };

        let cloth = save
            .execute(SaveItemParams {
                user_id: test_user_id(),
                name: "Cloth".to_string(),
                description: None,
                price: 28000.0,
                quantity: 3,
                remark: None,
            })
            .await
            .unwrap();
        let ship_cloth = || ShipItemsParams {
            user_id: test_user_id(),
            item_ids: vec![cloth.id],
        };
        let find_cloth = || FindItemByIdParams {
            id: cloth.id,
            user_id: test_user_id(),
        };

        let first = ship.execute(ship_cloth()).await.unwrap();
        assert_eq!(first.updated_ids, vec![cloth.id]);
        assert!(first.deleted_ids.is_empty());
        assert_eq!(find.execute(find_cloth()).await.unwrap().quantity, 2);

        let second = ship.execute(ship_cloth()).await.unwrap();
        assert_eq!(second.updated_ids, vec![cloth.id]);
        assert_eq!(find.execute(find_cloth()).await.unwrap().quantity, 1);

        let third = ship.execute(ship_cloth()).await.unwrap();
        assert!(third.updated_ids.is_empty());
        assert_eq!(third.deleted_ids, vec![cloth.id]);
        assert!(matches!(
            find.execute(find_cloth()).await.unwrap_err(),
            ItemError::NotFound
        ));
    }

    #[tokio::test]
    async fn should_ignore_items_of_other_owners() {
        let repository = Arc::new(InMemoryItemRepository::default());
        let foreign = stored_item(Uuid::new_v4(), 1);
        let foreign = Item {
            user_id: UserId::new("someone-else"),
            ..foreign
        };
        repository.save(&foreign).await.unwrap();

        let ship = ShipItemsUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };

        let result = ship
            .execute(ShipItemsParams {
                user_id: test_user_id(),
                item_ids: vec![foreign.id],
            })
            .await
            .unwrap();

        assert_eq!(result, ShipItemsResult::default());
        assert!(
            repository
                .find_by_id(foreign.id, &UserId::new("someone-else"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn should_report_only_ids_the_store_acted_upon() {
        let plenty = Uuid::new_v4();
        let last_one = Uuid::new_v4();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_ids()
            .returning(move |_, _| Ok(vec![stored_item(plenty, 2), stored_item(last_one, 1)]));
        mock_repo
            .expect_apply_shipment()
            .returning(move |_, _| {
                Ok(ShipmentPlan {
                    decrement_ids: vec![],
                    delete_ids: vec![last_one],
                })
            });

        let use_case = ShipItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ShipItemsParams {
                user_id: test_user_id(),
                item_ids: vec![plenty, last_one],
            })
            .await
            .unwrap();

        assert!(result.updated_ids.is_empty());
        assert_eq!(result.deleted_ids, vec![last_one]);
    }

    /// Serves `find_by_ids` from a snapshot taken earlier, as a concurrent
    /// shipment would see it; everything else hits the live store.
    struct StaleReads {
        live: Arc<InMemoryItemRepository>,
        snapshot: Vec<Item>,
    }

    #[async_trait]
    impl ItemRepository for StaleReads {
        async fn find_all(
            &self,
            user_id: &UserId,
            filter: &ItemFilter,
        ) -> Result<Vec<Item>, RepositoryError> {
            self.live.find_all(user_id, filter).await
        }

        async fn find_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Item, RepositoryError> {
            self.live.find_by_id(id, user_id).await
        }

        async fn find_by_ids(
            &self,
            _ids: &[Uuid],
            _user_id: &UserId,
        ) -> Result<Vec<Item>, RepositoryError> {
            Ok(self.snapshot.clone())
        }

        async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
            self.live.save(item).await
        }

        async fn apply_shipment(
            &self,
            plan: &ShipmentPlan,
            user_id: &UserId,
        ) -> Result<ShipmentPlan, RepositoryError> {
            self.live.apply_shipment(plan, user_id).await
        }
    }

    #[tokio::test]
    async fn should_leave_out_item_that_changed_since_it_was_loaded() {
        let live = Arc::new(InMemoryItemRepository::default());
        let cloth = stored_item(Uuid::new_v4(), 2);
        live.save(&cloth).await.unwrap();

        let current = ShipItemsUseCaseImpl {
            repository: live.clone(),
            logger: mock_logger(),
        };
        let lagging = ShipItemsUseCaseImpl {
            repository: Arc::new(StaleReads {
                live: live.clone(),
                snapshot: vec![cloth.clone()],
            }),
            logger: mock_logger(),
        };
        let ship_cloth = || ShipItemsParams {
            user_id: test_user_id(),
            item_ids: vec![cloth.id],
        };

        let first = current.execute(ship_cloth()).await.unwrap();
        assert_eq!(first.updated_ids, vec![cloth.id]);

        let second = lagging.execute(ship_cloth()).await.unwrap();
        assert_eq!(second, ShipItemsResult::default());
        assert_eq!(
            live.find_by_id(cloth.id, &test_user_id())
                .await
                .unwrap()
                .quantity,
            1
        );
    }
}
