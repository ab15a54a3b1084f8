//! Budget ledger domain module.
//!
//! One partition per calendar year holds a single budget total plus any number
//! of party expenditures. Pure mapping between records and stored items; no IO.

pub mod budget;
pub mod party;
pub mod view;

pub use budget::{BudgetTotal, BUDGET_SORT_KEY, DEFAULT_ANNUAL_BUDGET};
pub use party::{party_sort_key, PartyExpenditure, PartyInput, PARTY_SORT_KEY_PREFIX};
pub use view::{BudgetView, LedgerRecord, PartySummary};
