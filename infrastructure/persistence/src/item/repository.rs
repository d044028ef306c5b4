use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::filter::ItemFilter;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::item::shipment::ShipmentPlan;
use business::domain::shared::value_objects::UserId;

use super::entity::{ItemEntity, price_to_numeric};
use super::query::{DECREMENT_SQL, DELETE_SQL, find_all_query, find_by_id_sql, find_by_ids_sql};

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(error: sqlx::Error) -> RepositoryError {
    tracing::error!(%error, "items query failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn find_all(
        &self,
        user_id: &UserId,
        filter: &ItemFilter,
    ) -> Result<Vec<Item>, RepositoryError> {
        let mut query = find_all_query(user_id, filter)?;
        let entities = query
            .build_query_as::<ItemEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        entities.into_iter().map(ItemEntity::into_domain).collect()
    }

    async fn find_by_id(&self, id: Uuid, user_id: &UserId) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&find_by_id_sql())
            .bind(id)
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn find_by_ids(
        &self,
        ids: &[Uuid],
        user_id: &UserId,
    ) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(&find_by_ids_sql())
            .bind(ids)
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        entities.into_iter().map(ItemEntity::into_domain).collect()
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO items (id, user_id, name, description, quantity, price, remark, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
        )
        .bind(item.id)
        .bind(item.user_id.as_str())
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.quantity)
        .bind(price_to_numeric(item.price)?)
        .bind(&item.remark)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    /// Both bulk statements share one transaction: either the whole shipment
    /// lands or none of it does. The quantity guards keep a row that changed
    /// since it was loaded from reaching zero; such rows are left out of the
    /// returned ids.
    async fn apply_shipment(
        &self,
        plan: &ShipmentPlan,
        user_id: &UserId,
    ) -> Result<ShipmentPlan, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let mut decremented = Vec::new();
        if !plan.decrement_ids.is_empty() {
            decremented = sqlx::query_scalar::<_, Uuid>(DECREMENT_SQL)
                .bind(plan.decrement_ids.as_slice())
                .bind(user_id.as_str())
                .fetch_all(&mut *tx)
                .await
                .map_err(database_error)?;
            tracing::debug!(rows = decremented.len(), "items decremented");
        }

        let mut deleted = Vec::new();
        if !plan.delete_ids.is_empty() {
            deleted = sqlx::query_scalar::<_, Uuid>(DELETE_SQL)
                .bind(plan.delete_ids.as_slice())
                .bind(user_id.as_str())
                .fetch_all(&mut *tx)
                .await
                .map_err(database_error)?;
            tracing::debug!(rows = deleted.len(), "items deleted");
        }

        tx.commit().await.map_err(database_error)?;
        Ok(plan.narrowed_to(&decremented, &deleted))
    }
}
