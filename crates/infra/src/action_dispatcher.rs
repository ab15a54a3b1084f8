//! Function-call dispatch.
//!
//! ```text
//! Invocation
//!   ↓
//! 1. Resolve the function name to an `Action`
//!   ↓
//! 2. Extract the action's parameters (all optional)
//!   ↓
//! 3. Resolve the current year from the injected clock
//!   ↓
//! 4. Run the service
//!   ↓
//! 5. Wrap the payload in the response envelope (identifiers echoed)
//! ```
//!
//! Services already turn store failures into message payloads, so once an
//! action is resolved the caller always gets an envelope back.

use core::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use soiree_core::Clock;
use soiree_invocation::{build_result, extract_params, FunctionResponseEnvelope, Invocation};
use soiree_ledger::PartyInput;

use crate::services::{BudgetQueryService, InventoryQueryService, PartyWriteService, RentalPriceService};
use crate::stores::{InventoryStore, LedgerStore};
use crate::table_store::TableStore;

/// Parameter names accepted by `save-party`.
pub const PARTY_DATE: &str = "partyDate";
pub const PARTY_NAME: &str = "partyName";
pub const PARTY_COST: &str = "partyCost";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("invocation does not name a function")]
    MissingFunction,
}

/// The tools this backend exposes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    GetBudget,
    SaveParty,
    GetInventory,
    GetRentalPrices,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::GetBudget,
        Action::SaveParty,
        Action::GetInventory,
        Action::GetRentalPrices,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::GetBudget => "get-budget",
            Action::SaveParty => "save-party",
            Action::GetInventory => "get-inventory",
            Action::GetRentalPrices => "get-rental-prices",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DispatchError;

    /// Accepts `get-budget`, `get_budget` and `getBudget` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "getbudget" => Ok(Action::GetBudget),
            "saveparty" => Ok(Action::SaveParty),
            "getinventory" => Ok(Action::GetInventory),
            "getrentalprices" => Ok(Action::GetRentalPrices),
            _ => Err(DispatchError::UnknownFunction(s.to_string())),
        }
    }
}

/// `save-party` parameter contract: every field optional, none validated,
/// values passed through as supplied. A missing date files the party under
/// the bare `party#` key.
pub fn party_input(call: &Invocation) -> PartyInput {
    let params = extract_params(call, &[PARTY_DATE, PARTY_NAME, PARTY_COST]);
    PartyInput {
        date: params.get(PARTY_DATE).cloned(),
        name: params.get(PARTY_NAME).cloned(),
        cost: params.get(PARTY_COST).cloned(),
    }
}

pub struct ActionDispatcher<S> {
    budget: BudgetQueryService<S>,
    parties: PartyWriteService<S>,
    inventory: InventoryQueryService<S>,
    prices: RentalPriceService,
    clock: Arc<dyn Clock>,
}

impl<S> ActionDispatcher<S>
where
    S: TableStore + Clone,
{
    pub fn new(ledger: LedgerStore<S>, inventory: InventoryStore<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            budget: BudgetQueryService::new(ledger.clone()),
            parties: PartyWriteService::new(ledger),
            inventory: InventoryQueryService::new(inventory),
            prices: RentalPriceService,
            clock,
        }
    }
}

impl<S> ActionDispatcher<S>
where
    S: TableStore,
{
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Dispatch on the function named by the invocation itself.
    pub async fn dispatch_invocation(
        &self,
        call: &Invocation,
    ) -> Result<FunctionResponseEnvelope, DispatchError> {
        let function = call.function().ok_or(DispatchError::MissingFunction)?;
        self.dispatch(function, call).await
    }

    /// Dispatch on an explicitly named function (e.g. from a route path).
    pub async fn dispatch(
        &self,
        function: &str,
        call: &Invocation,
    ) -> Result<FunctionResponseEnvelope, DispatchError> {
        let action = function.parse::<Action>()?;
        Ok(self.execute(action, call).await)
    }

    #[instrument(skip_all, fields(action = %action, action_group = call.action_group().unwrap_or("")))]
    pub async fn execute(&self, action: Action, call: &Invocation) -> FunctionResponseEnvelope {
        match action {
            Action::GetBudget => {
                let year = self.clock.current_year();
                build_result(call, &self.budget.get_budget(year).await)
            }
            Action::SaveParty => {
                let year = self.clock.current_year();
                build_result(call, &self.parties.save_party(year, party_input(call)).await)
            }
            Action::GetInventory => build_result(call, &self.inventory.get_inventory().await),
            Action::GetRentalPrices => build_result(call, &self.prices.get_rental_prices()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use soiree_invocation::Parameter;

    #[test]
    fn action_names_accept_common_spellings() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
            assert_eq!(action.as_str().replace('-', "_").parse::<Action>().unwrap(), action);
        }
        assert_eq!("getBudget".parse::<Action>().unwrap(), Action::GetBudget);
        assert_eq!(
            "create-graphic".parse::<Action>(),
            Err(DispatchError::UnknownFunction("create-graphic".to_string()))
        );
    }

    #[test]
    fn party_input_reads_structured_parameters() {
        let call = Invocation::structured(
            "budget",
            "save-party",
            vec![
                Parameter::new(PARTY_DATE, "2024-07-04"),
                Parameter::new(PARTY_NAME, "Summer Bash"),
                Parameter::new(PARTY_COST, "450"),
            ],
        );

        assert_eq!(
            party_input(&call),
            PartyInput {
                date: Some(json!("2024-07-04")),
                name: Some(json!("Summer Bash")),
                cost: Some(json!("450")),
            }
        );
    }

    #[test]
    fn party_input_tolerates_missing_parameters() {
        let call: Invocation = serde_json::from_value(json!({"partyName": "Mystery"})).unwrap();
        assert_eq!(
            party_input(&call),
            PartyInput {
                name: Some(json!("Mystery")),
                ..PartyInput::default()
            }
        );
    }
}
