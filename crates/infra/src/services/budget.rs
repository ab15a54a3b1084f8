use tracing::{error, info, instrument};

use soiree_core::Year;
use soiree_ledger::{party_sort_key, BudgetView, PartyExpenditure, PartyInput};

use crate::stores::LedgerStore;
use crate::table_store::TableStore;

use super::{Message, Reply, GET_BUDGET_FAILED, SAVE_PARTY_FAILED, SAVE_PARTY_SUCCEEDED};

/// Reads a year's budget total together with every party expenditure.
#[derive(Debug, Clone)]
pub struct BudgetQueryService<S> {
    ledger: LedgerStore<S>,
}

impl<S> BudgetQueryService<S>
where
    S: TableStore,
{
    pub fn new(ledger: LedgerStore<S>) -> Self {
        Self { ledger }
    }

    /// `{annualBudget, parties}` for `year`. No sorting or filtering is applied;
    /// parties come back in storage order.
    #[instrument(skip_all, fields(year = %year))]
    pub async fn get_budget(&self, year: Year) -> Reply<BudgetView> {
        match self.ledger.budget_view(year).await {
            Ok(view) => Reply::Data(view),
            Err(err) => {
                error!(error = %err, "failed to read budget");
                Reply::message(GET_BUDGET_FAILED)
            }
        }
    }
}

/// Records what a party costs.
#[derive(Debug, Clone)]
pub struct PartyWriteService<S> {
    ledger: LedgerStore<S>,
}

impl<S> PartyWriteService<S>
where
    S: TableStore,
{
    pub fn new(ledger: LedgerStore<S>) -> Self {
        Self { ledger }
    }

    /// Write the party for `input.date`, overwriting any earlier party on that
    /// date. Input is not validated; only an acknowledgement is returned.
    #[instrument(skip_all, fields(year = %year, sort_key = %party_sort_key(input.date.as_ref())))]
    pub async fn save_party(&self, year: Year, input: PartyInput) -> Message {
        let party = PartyExpenditure::new(year, input);
        match self.ledger.put_party(&party).await {
            Ok(()) => {
                info!("party saved");
                Message::new(SAVE_PARTY_SUCCEEDED)
            }
            Err(err) => {
                error!(error = %err, "failed to save party");
                Message::new(SAVE_PARTY_FAILED)
            }
        }
    }
}
