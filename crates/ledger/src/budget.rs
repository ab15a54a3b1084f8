use serde_json::Value as JsonValue;

use soiree_core::{DomainError, DomainResult, Item, SortKey, Year};

/// Sort key of the one budget-total record in a year partition.
pub const BUDGET_SORT_KEY: &str = "budget";

/// Annual budget reported when a year has no budget total (or it has no amount).
pub const DEFAULT_ANNUAL_BUDGET: i64 = 5000;

/// Budget total for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTotal {
    pub year: Year,
    /// Stored verbatim; `None` when the record carries no amount.
    pub amount: Option<JsonValue>,
}

impl BudgetTotal {
    pub fn new(year: Year, amount: impl Into<JsonValue>) -> Self {
        Self {
            year,
            amount: Some(amount.into()),
        }
    }

    pub fn sort_key() -> SortKey {
        SortKey::new(BUDGET_SORT_KEY)
    }

    /// Amount to report, falling back to `DEFAULT_ANNUAL_BUDGET`.
    pub fn effective_amount(&self) -> JsonValue {
        self.amount
            .clone()
            .unwrap_or_else(|| JsonValue::from(DEFAULT_ANNUAL_BUDGET))
    }

    pub fn to_item(&self) -> Item {
        Item::new(self.year.partition_key(), Self::sort_key()).with_attr("amount", self.amount.clone())
    }

    pub fn from_item(item: &Item) -> DomainResult<Self> {
        if item.sk.as_str() != BUDGET_SORT_KEY {
            return Err(DomainError::unexpected_key(format!(
                "expected `{BUDGET_SORT_KEY}`, found `{}`",
                item.sk
            )));
        }
        let year = item.pk.as_str().parse::<Year>()?;
        Ok(Self {
            year,
            amount: item.attr("amount").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn budget_total_maps_to_year_partition() {
        let item = BudgetTotal::new(Year::new(2024), 3000).to_item();
        assert_eq!(item.pk.as_str(), "2024");
        assert_eq!(item.sk.as_str(), "budget");
        assert_eq!(item.attr("amount"), Some(&json!(3000)));
    }

    #[test]
    fn missing_amount_falls_back_to_default() {
        let total = BudgetTotal::from_item(&Item::new("2024", "budget")).unwrap();
        assert_eq!(total.amount, None);
        assert_eq!(total.effective_amount(), json!(5000));
    }

    #[test]
    fn party_item_is_not_a_budget_total() {
        let err = BudgetTotal::from_item(&Item::new("2024", "party#2024-07-04")).unwrap_err();
        assert!(matches!(err, DomainError::UnexpectedKey(_)));
    }
}
