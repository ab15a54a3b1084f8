//! Named parameter extraction.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value as JsonValue;

use crate::invocation::Invocation;

/// Value of `name` in the call, if present. No required-field validation.
pub fn extract_param<'a>(call: &'a Invocation, name: &str) -> Option<&'a JsonValue> {
    call.param(name)
}

/// Extract several parameters at once, keeping the order of `names`.
pub fn extract_params(call: &Invocation, names: &[&str]) -> ParamMap {
    ParamMap {
        entries: names
            .iter()
            .map(|name| (name.to_string(), call.param(name).cloned()))
            .collect(),
    }
}

/// Ordered `name -> value` mapping; requested-but-missing names map to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamMap {
    entries: Vec<(String, Option<JsonValue>)>,
}

impl ParamMap {
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Whether `name` was requested (regardless of whether it was supplied).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&JsonValue>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }
}

impl Serialize for ParamMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
