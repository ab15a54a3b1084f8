//! Stored table items.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::key::{PartitionKey, SortKey};

/// Free-form item attributes (everything except the two key fields).
pub type Attributes = Map<String, JsonValue>;

/// One row of a partitioned key-value table.
///
/// Attributes are kept as loosely-typed JSON so writers can store whatever a
/// caller supplied; record types in the domain crates give them meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub pk: PartitionKey,
    pub sk: SortKey,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Item {
    pub fn new(pk: impl Into<PartitionKey>, sk: impl Into<SortKey>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
            attributes: Attributes::new(),
        }
    }

    /// Set an attribute, skipping it entirely when `value` is `None`.
    pub fn with_attr(mut self, name: &str, value: Option<JsonValue>) -> Self {
        if let Some(v) = value {
            self.attributes.insert(name.to_string(), v);
        }
        self
    }

    pub fn attr(&self, name: &str) -> Option<&JsonValue> {
        self.attributes.get(name).filter(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn with_attr_skips_missing_values() {
        let item = Item::new("2024", "party#")
            .with_attr("name", Some(json!("Bash")))
            .with_attr("amount", None);

        assert_eq!(item.attributes.len(), 1);
        assert_eq!(item.attr("name"), Some(&json!("Bash")));
        assert_eq!(item.attr("amount"), None);
    }

    #[test]
    fn null_attributes_read_as_absent() {
        let item = Item::new("2024", "budget").with_attr("amount", Some(JsonValue::Null));
        assert_eq!(item.attr("amount"), None);
    }
}
