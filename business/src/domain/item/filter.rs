use super::errors::ItemError;
use super::model::{Item, is_positive_amount};

/// Search criteria for an owner's inventory.
///
/// Each field is an independent constraint. When any of them is set an item
/// is included if it satisfies at least one of the set constraints; the
/// constraints are OR-ed, never AND-ed. With no constraint set every item
/// matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub item_name: Option<String>,
    pub max_quantity: Option<i32>,
    pub max_price: Option<f64>,
}

impl ItemFilter {
    /// Normalizes raw criteria: an empty name counts as absent, ceilings must be positive.
    pub fn new(
        item_name: Option<String>,
        max_quantity: Option<i32>,
        max_price: Option<f64>,
    ) -> Result<Self, ItemError> {
        if let Some(quantity) = max_quantity
            && quantity < 1
        {
            return Err(ItemError::InvalidMaxQuantity);
        }

        if let Some(price) = max_price
            && !is_positive_amount(price)
        {
            return Err(ItemError::InvalidMaxPrice);
        }

        Ok(Self {
            item_name: item_name.filter(|name| !name.is_empty()),
            max_quantity,
            max_price,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.item_name.is_none() && self.max_quantity.is_none() && self.max_price.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if self.is_empty() {
            return true;
        }

        let by_name = self
            .item_name
            .as_deref()
            .is_some_and(|name| item.name.contains(name));
        let by_quantity = self
            .max_quantity
            .is_some_and(|ceiling| item.quantity <= ceiling);
        let by_price = self.max_price.is_some_and(|ceiling| item.price <= ceiling);

        by_name || by_quantity || by_price
    }
}
