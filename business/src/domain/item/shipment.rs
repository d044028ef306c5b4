use std::collections::HashSet;

use uuid::Uuid;

use super::model::Item;

/// Split of a shipment into rows that keep stock and rows that run out.
///
/// `decrement_ids` and `delete_ids` are disjoint and keep the order in which
/// items were handed to [`ShipmentPlan::from_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentPlan {
    pub decrement_ids: Vec<Uuid>,
    pub delete_ids: Vec<Uuid>,
}

impl ShipmentPlan {
    /// Items with more than one unit lose one unit; the rest are removed.
    /// An id seen twice is only planned once.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut seen = HashSet::new();
        let mut plan = Self::default();

        for item in items {
            if !seen.insert(item.id) {
                continue;
            }
            if item.survives_shipment() {
                plan.decrement_ids.push(item.id);
            } else {
                plan.delete_ids.push(item.id);
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.decrement_ids.is_empty() && self.delete_ids.is_empty()
    }

    /// Keeps only the planned ids that were reported as applied, in plan order.
    pub fn narrowed_to(&self, decremented: &[Uuid], deleted: &[Uuid]) -> Self {
        let decremented: HashSet<&Uuid> = decremented.iter().collect();
        let deleted: HashSet<&Uuid> = deleted.iter().collect();

        Self {
            decrement_ids: self
                .decrement_ids
                .iter()
                .filter(|id| decremented.contains(id))
                .copied()
                .collect(),
            delete_ids: self
                .delete_ids
                .iter()
                .filter(|id| deleted.contains(id))
                .copied()
                .collect(),
        }
    }
}
