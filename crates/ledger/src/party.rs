use serde_json::Value as JsonValue;

use soiree_core::{Item, SortKey, Year};

pub const PARTY_SORT_KEY_PREFIX: &str = "party#";

/// Sort key for the party held on `date`; a missing date maps to the bare prefix.
/// Non-string dates are keyed by their JSON text.
pub fn party_sort_key(date: Option<&JsonValue>) -> SortKey {
    let date = match date {
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    SortKey::new(format!("{PARTY_SORT_KEY_PREFIX}{date}"))
}

/// Caller-supplied party details.
///
/// Every field is optional and unvalidated: a missing field is simply not
/// written, and every supplied value is stored exactly as received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyInput {
    pub date: Option<JsonValue>,
    pub name: Option<JsonValue>,
    pub cost: Option<JsonValue>,
}

/// One party's expenditure inside a year partition.
///
/// Keyed by date: writing a second party for the same date replaces the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyExpenditure {
    pub year: Year,
    pub name: Option<JsonValue>,
    pub amount: Option<JsonValue>,
    pub date: Option<JsonValue>,
}

impl PartyExpenditure {
    pub fn new(year: Year, input: PartyInput) -> Self {
        Self {
            year,
            name: input.name,
            amount: input.cost,
            date: input.date,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        party_sort_key(self.date.as_ref())
    }

    pub fn to_item(&self) -> Item {
        Item::new(self.year.partition_key(), self.sort_key())
            .with_attr("name", self.name.clone())
            .with_attr("amount", self.amount.clone())
            .with_attr("date", self.date.clone())
    }
}
