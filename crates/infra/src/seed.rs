//! Bootstrap seeder.
//!
//! Writes the initial inventory and the budget total for one year. Writes are
//! sequential and unconditional: re-running resets the budget total and every
//! seeded item. The first failed write aborts the run and leaves whatever was
//! already written in place.

use serde_json::Value as JsonValue;
use tracing::{info, instrument};

use soiree_core::Year;
use soiree_inventory::InventoryRecord;
use soiree_ledger::BudgetTotal;

use crate::stores::{InventoryStore, LedgerStore};
use crate::table_store::{TableStore, TableStoreError};

#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    pub inventory: Vec<InventoryRecord>,
    pub annual_budget: JsonValue,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            inventory: vec![
                InventoryRecord::new("chair", 50),
                InventoryRecord::new("projector", 2),
                InventoryRecord::new("speaker_system", 1),
            ],
            annual_budget: JsonValue::from(3000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BootstrapSeeder<S> {
    ledger: LedgerStore<S>,
    inventory: InventoryStore<S>,
    data: SeedData,
}

impl<S> BootstrapSeeder<S>
where
    S: TableStore,
{
    pub fn new(ledger: LedgerStore<S>, inventory: InventoryStore<S>) -> Self {
        Self::with_data(ledger, inventory, SeedData::default())
    }

    pub fn with_data(ledger: LedgerStore<S>, inventory: InventoryStore<S>, data: SeedData) -> Self {
        Self {
            ledger,
            inventory,
            data,
        }
    }

    /// Inventory first, then the budget total for `year`.
    #[instrument(skip_all, fields(year = %year), err)]
    pub async fn seed(&self, year: Year) -> Result<(), TableStoreError> {
        for record in &self.data.inventory {
            self.inventory.put(record).await?;
            info!(item = %record.name, quantity = ?record.quantity, "seeded inventory item");
        }

        let total = BudgetTotal::new(year, self.data.annual_budget.clone());
        self.ledger.put_budget_total(&total).await?;
        info!(amount = %self.data.annual_budget, "seeded budget total");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::table_store::{InMemoryTableStore, TableName};
    use serde_json::json;

    fn seeder(store: Arc<InMemoryTableStore>) -> BootstrapSeeder<Arc<InMemoryTableStore>> {
        BootstrapSeeder::new(
            LedgerStore::new(store.clone(), TableName::new("budget")),
            InventoryStore::new(store, TableName::new("logistics")),
        )
    }

    #[tokio::test]
    async fn seeds_inventory_and_budget() {
        let store = Arc::new(InMemoryTableStore::new());
        seeder(store.clone()).seed(Year::new(2024)).await.unwrap();

        let inventory = InventoryStore::new(store.clone(), TableName::new("logistics"));
        let names: Vec<_> = inventory
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| (r.name, r.quantity))
            .collect();
        assert_eq!(
            names,
            vec![
                ("chair".to_string(), Some(json!(50))),
                ("projector".to_string(), Some(json!(2))),
                ("speaker_system".to_string(), Some(json!(1))),
            ]
        );

        let ledger = LedgerStore::new(store, TableName::new("budget"));
        let total = ledger.budget_total(Year::new(2024)).await.unwrap().unwrap();
        assert_eq!(total.amount, Some(json!(3000)));
    }

    #[tokio::test]
    async fn reseeding_resets_the_budget_total() {
        let store = Arc::new(InMemoryTableStore::new());
        let ledger = LedgerStore::new(store.clone(), TableName::new("budget"));
        ledger
            .put_budget_total(&BudgetTotal::new(Year::new(2024), 9999))
            .await
            .unwrap();

        seeder(store.clone()).seed(Year::new(2024)).await.unwrap();
        seeder(store.clone()).seed(Year::new(2024)).await.unwrap();

        let total = ledger.budget_total(Year::new(2024)).await.unwrap().unwrap();
        assert_eq!(total.amount, Some(json!(3000)));
        // 3 inventory items + 1 budget total, no duplicates.
        assert_eq!(store.len(), 4);
    }
}
