use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ItemError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub remark: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewItemProps {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub remark: Option<String>,
}

impl Item {
    /// Builds a freshly received item owned by `props.user_id`.
    ///
    /// Rejects an empty name, a non-positive quantity and a price that is
    /// not a positive finite number.
    pub fn new(props: NewItemProps) -> Result<Self, ItemError> {
        if props.name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        if props.quantity < 1 {
            return Err(ItemError::InvalidQuantity);
        }

        if !is_positive_amount(props.price) {
            return Err(ItemError::InvalidPrice);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name: props.name,
            description: props.description,
            quantity: props.quantity,
            price: props.price,
            remark: props.remark,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        description: Option<String>,
        quantity: i32,
        price: f64,
        remark: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            quantity,
            price,
            remark,
            created_at,
            updated_at,
        }
    }

    /// Whether shipping one unit leaves stock behind.
    pub fn survives_shipment(&self) -> bool {
        self.quantity > 1
    }
}

pub(crate) fn is_positive_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
