use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: BigDecimal,
    pub remark: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemEntity {
    /// Fails when the stored price has no finite positive `f64` form.
    pub fn into_domain(self) -> Result<Item, RepositoryError> {
        let Some(price) = self
            .price
            .to_f64()
            .filter(|price| price.is_finite() && *price > 0.0)
        else {
            tracing::error!(id = %self.id, price = %self.price, "unreadable item price");
            return Err(RepositoryError::DatabaseError);
        };

        Ok(Item::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            self.description,
            self.quantity,
            price,
            self.remark,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Converts a domain price into the `NUMERIC` stored in `items.price`.
///
/// Goes through the shortest decimal rendering of the float so `0.1` is
/// stored as `0.1` rather than its binary expansion.
pub fn price_to_numeric(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_str(&price.to_string()).map_err(|_| RepositoryError::DatabaseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_store_price_as_short_decimal() {
        let numeric = price_to_numeric(0.1).unwrap();

        assert_eq!(numeric, BigDecimal::from_str("0.1").unwrap());
    }

    #[test]
    fn should_reject_non_finite_price() {
        assert!(price_to_numeric(f64::NAN).is_err());
    }

    fn entity_with_price(id: Uuid, price: &str) -> ItemEntity {
        let now = Utc::now();
        ItemEntity {
            id,
            user_id: "clerk-1".to_string(),
            name: "Cloth".to_string(),
            description: None,
            quantity: 3,
            price: BigDecimal::from_str(price).unwrap(),
            remark: Some("Dock 4".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_map_row_into_domain_item() {
        let id = Uuid::new_v4();
        let entity = entity_with_price(id, "28000.00");

        let item = entity.into_domain().unwrap();

        assert_eq!(item.id, id);
        assert_eq!(item.user_id, UserId::new("clerk-1"));
        assert_eq!(item.price, 28000.0);
        assert_eq!(item.remark.as_deref(), Some("Dock 4"));
    }

    #[test]
    fn should_reject_row_with_zero_price() {
        let entity = entity_with_price(Uuid::new_v4(), "0");

        assert!(matches!(
            entity.into_domain(),
            Err(RepositoryError::DatabaseError)
        ));
    }

    #[test]
    fn should_reject_row_with_price_beyond_f64() {
        let entity = entity_with_price(Uuid::new_v4(), "1e400");

        assert!(entity.into_domain().is_err());
    }
}
