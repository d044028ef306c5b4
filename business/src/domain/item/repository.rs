use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::filter::ItemFilter;
use super::model::Item;
use super::shipment::ShipmentPlan;

/// Every method is scoped to `user_id`: rows of other owners are never
/// returned, changed or removed.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Items matching `filter`, newest first.
    async fn find_all(
        &self,
        user_id: &UserId,
        filter: &ItemFilter,
    ) -> Result<Vec<Item>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Item, RepositoryError>;
    /// Ids with no matching row are skipped.
    async fn find_by_ids(
        &self,
        ids: &[Uuid],
        user_id: &UserId,
    ) -> Result<Vec<Item>, RepositoryError>;
    async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
    /// Decrements `plan.decrement_ids` by one and deletes `plan.delete_ids`,
    /// all or nothing. Returns the ids actually acted upon: a row whose
    /// quantity moved to the other side of one since it was loaded is left
    /// untouched and missing from the result.
    async fn apply_shipment(
        &self,
        plan: &ShipmentPlan,
        user_id: &UserId,
    ) -> Result<ShipmentPlan, RepositoryError>;
}
