use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use soiree_core::{DomainError, DomainResult, Item, PartitionKey, SortKey};

/// Single partition holding every inventory record.
pub const INVENTORY_PARTITION: &str = "INVENTORY";

pub fn inventory_partition() -> PartitionKey {
    PartitionKey::new(INVENTORY_PARTITION)
}

/// Quantity on hand for one rentable item type.
///
/// No record means the item is not stocked at all, which is distinct from a
/// record with quantity zero. Stored quantities are reported as written, even
/// when they are not whole numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub name: String,
    pub quantity: Option<JsonValue>,
}

impl InventoryRecord {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity: Some(JsonValue::from(quantity)),
        }
    }

    pub fn to_item(&self) -> Item {
        Item::new(inventory_partition(), SortKey::new(self.name.clone()))
            .with_attr("quantity", self.quantity.clone())
    }

    pub fn from_item(item: &Item) -> DomainResult<Self> {
        if item.pk.as_str() != INVENTORY_PARTITION {
            return Err(DomainError::unexpected_key(format!(
                "expected partition `{INVENTORY_PARTITION}`, found `{}`",
                item.pk
            )));
        }
        Ok(Self {
            name: item.sk.as_str().to_string(),
            quantity: item.attr("quantity").cloned(),
        })
    }
}

/// `{name, quantity}` as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItemView {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<JsonValue>,
}

impl From<InventoryRecord> for InventoryItemView {
    fn from(record: InventoryRecord) -> Self {
        Self {
            name: record.name,
            quantity: record.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_is_keyed_by_item_name() {
        let item = InventoryRecord::new("projector", 2).to_item();
        assert_eq!(item.pk.as_str(), "INVENTORY");
        assert_eq!(item.sk.as_str(), "projector");
        assert_eq!(item.attr("quantity"), Some(&json!(2)));

        assert_eq!(InventoryRecord::from_item(&item).unwrap(), InventoryRecord::new("projector", 2));
    }

    #[test]
    fn items_outside_the_inventory_partition_are_rejected() {
        let err = InventoryRecord::from_item(&Item::new("2024", "chair")).unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedKey(_)));
    }

    #[test]
    fn zero_quantity_is_kept_distinct_from_missing() {
        let zero = InventoryRecord::from_item(&InventoryRecord::new("chair", 0).to_item()).unwrap();
        let missing = InventoryRecord::from_item(&Item::new("INVENTORY", "chair")).unwrap();

        assert_eq!(zero.quantity, Some(json!(0)));
        assert_eq!(missing.quantity, None);
        assert_eq!(
            serde_json::to_value(InventoryItemView::from(missing)).unwrap(),
            json!({"name": "chair"})
        );
    }

    #[test]
    fn odd_quantities_are_reported_as_stored() {
        for quantity in [json!(2.0), json!("50"), json!(-1)] {
            let item = Item::new("INVENTORY", "tent").with_attr("quantity", Some(quantity.clone()));
            let record = InventoryRecord::from_item(&item).unwrap();

            assert_eq!(
                serde_json::to_value(InventoryItemView::from(record)).unwrap(),
                json!({"name": "tent", "quantity": quantity})
            );
        }
    }
}
