use sqlx::{Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::item::filter::ItemFilter;
use business::domain::shared::value_objects::UserId;

use super::entity::price_to_numeric;

pub const ITEM_COLUMNS: &str =
    "id, user_id, name, description, quantity, price, remark, created_at, updated_at";

/// Binds `$1` id, `$2` owner.
pub fn find_by_id_sql() -> String {
    format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1 AND user_id = $2")
}

/// Binds `$1` id array, `$2` owner.
pub fn find_by_ids_sql() -> String {
    format!(
        "SELECT {ITEM_COLUMNS} FROM items WHERE id = ANY($1) AND user_id = $2 ORDER BY created_at DESC"
    )
}

pub const DECREMENT_SQL: &str = "UPDATE items SET quantity = quantity - 1, updated_at = NOW() \
     WHERE id = ANY($1) AND user_id = $2 AND quantity > 1 RETURNING id";

pub const DELETE_SQL: &str =
    "DELETE FROM items WHERE id = ANY($1) AND user_id = $2 AND quantity <= 1 RETURNING id";

/// Builds the owner-scoped listing query for `filter`.
///
/// Present constraints are OR-ed inside one parenthesised group so the
/// owner check always applies.
pub fn find_all_query<'a>(
    user_id: &'a UserId,
    filter: &'a ItemFilter,
) -> Result<QueryBuilder<'a, Postgres>, RepositoryError> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {ITEM_COLUMNS} FROM items WHERE user_id = "
    ));
    builder.push_bind(user_id.as_str());

    if !filter.is_empty() {
        builder.push(" AND (");
        let mut constraints = builder.separated(" OR ");
        if let Some(name) = &filter.item_name {
            constraints.push("strpos(name, ");
            constraints.push_bind_unseparated(name.as_str());
            constraints.push_unseparated(") > 0");
        }
        if let Some(max_quantity) = filter.max_quantity {
            constraints.push("quantity <= ");
            constraints.push_bind_unseparated(max_quantity);
        }
        if let Some(max_price) = filter.max_price {
            constraints.push("price <= ");
            constraints.push_bind_unseparated(price_to_numeric(max_price)?);
        }
        builder.push(")");
    }

    builder.push(" ORDER BY created_at DESC");
    Ok(builder)
}
