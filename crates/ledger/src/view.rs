//! Aggregate budget view over one year partition.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use soiree_core::{DomainResult, Item};

use crate::budget::{BudgetTotal, BUDGET_SORT_KEY, DEFAULT_ANNUAL_BUDGET};

/// A stored item of a year partition, classified by sort key.
///
/// Anything that is not the budget total counts as a party expenditure.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerRecord {
    BudgetTotal(BudgetTotal),
    Party(PartySummary),
}

impl LedgerRecord {
    pub fn from_item(item: &Item) -> DomainResult<Self> {
        if item.sk.as_str() == BUDGET_SORT_KEY {
            BudgetTotal::from_item(item).map(LedgerRecord::BudgetTotal)
        } else {
            Ok(LedgerRecord::Party(PartySummary::from_item(item)))
        }
    }
}

/// Party expenditure as reported to callers (key fields dropped).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<JsonValue>,
}

impl PartySummary {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.attr("name").cloned(),
            amount: item.attr("amount").cloned(),
            date: item.attr("date").cloned(),
        }
    }
}

/// `{annualBudget, parties}` for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    pub annual_budget: JsonValue,
    pub parties: Vec<PartySummary>,
}

impl BudgetView {
    /// Build the view from a partition scan, keeping storage order.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> DomainResult<Self> {
        let mut annual_budget = None;
        let mut parties = Vec::new();

        for item in items {
            match LedgerRecord::from_item(item)? {
                LedgerRecord::BudgetTotal(total) => {
                    annual_budget.get_or_insert_with(|| total.effective_amount());
                }
                LedgerRecord::Party(party) => parties.push(party),
            }
        }

        Ok(Self {
            annual_budget: annual_budget.unwrap_or_else(|| JsonValue::from(DEFAULT_ANNUAL_BUDGET)),
            parties,
        })
    }
}
