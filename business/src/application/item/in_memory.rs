use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::item::filter::ItemFilter;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::shipment::ShipmentPlan;
use crate::domain::shared::value_objects::UserId;

/// Store honouring owner scoping and the quantity guards of a shipment.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Mutex<Vec<Item>>,
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(
        &self,
        user_id: &UserId,
        filter: &ItemFilter,
    ) -> Result<Vec<Item>, RepositoryError> {
        let items = self.items.lock().unwrap();
        let mut found: Vec<Item> = items
            .iter()
            .filter(|i| &i.user_id == user_id && filter.matches(i))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn find_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Item, RepositoryError> {
        let items = self.items.lock().unwrap();
        items
            .iter()
            .find(|i| i.id == id && &i.user_id == user_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_ids(
        &self,
        ids: &[Uuid],
        user_id: &UserId,
    ) -> Result<Vec<Item>, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|i| ids.contains(&i.id) && &i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn apply_shipment(
        &self,
        plan: &ShipmentPlan,
        user_id: &UserId,
    ) -> Result<ShipmentPlan, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        let mut decremented = Vec::new();
        let mut deleted = Vec::new();

        for item in items.iter_mut() {
            if &item.user_id == user_id
                && item.quantity > 1
                && plan.decrement_ids.contains(&item.id)
            {
                item.quantity -= 1;
                decremented.push(item.id);
            }
        }
        items.retain(|i| {
            let remove =
                &i.user_id == user_id && i.quantity <= 1 && plan.delete_ids.contains(&i.id);
            if remove {
                deleted.push(i.id);
            }
            !remove
        });

        Ok(plan.narrowed_to(&decremented, &deleted))
    }
}
