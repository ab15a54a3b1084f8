//! Typed stores over the raw table store.
//!
//! `LedgerStore` owns the yearly budget partitions and `InventoryStore` the
//! fixed inventory partition. Both share one `TableStore` backend and differ
//! only in their table name.

use soiree_core::{Item, Year};
use soiree_inventory::{inventory_partition, InventoryRecord};
use soiree_ledger::{BudgetTotal, BudgetView, PartyExpenditure};

use crate::table_store::{TableName, TableStore, TableStoreError};

#[derive(Debug, Clone)]
pub struct LedgerStore<S> {
    store: S,
    table: TableName,
}

impl<S> LedgerStore<S>
where
    S: TableStore,
{
    pub fn new(store: S, table: TableName) -> Self {
        Self { store, table }
    }

    /// Every item of the year partition, in storage order.
    pub async fn year_items(&self, year: Year) -> Result<Vec<Item>, TableStoreError> {
        self.store.query_partition(&self.table, &year.partition_key()).await
    }

    pub async fn budget_view(&self, year: Year) -> Result<BudgetView, TableStoreError> {
        let items = self.year_items(year).await?;
        Ok(BudgetView::from_items(&items)?)
    }

    /// The year's budget total record, if one has been written.
    pub async fn budget_total(&self, year: Year) -> Result<Option<BudgetTotal>, TableStoreError> {
        let item = self
            .store
            .get(&self.table, &year.partition_key(), &BudgetTotal::sort_key())
            .await?;
        Ok(item.as_ref().map(BudgetTotal::from_item).transpose()?)
    }

    pub async fn put_budget_total(&self, total: &BudgetTotal) -> Result<(), TableStoreError> {
        self.store.put(&self.table, total.to_item()).await
    }

    /// Write a party, replacing any party already recorded for the same date.
    pub async fn put_party(&self, party: &PartyExpenditure) -> Result<(), TableStoreError> {
        self.store.put(&self.table, party.to_item()).await
    }
}

#[derive(Debug, Clone)]
pub struct InventoryStore<S> {
    store: S,
    table: TableName,
}

impl<S> InventoryStore<S>
where
    S: TableStore,
{
    pub fn new(store: S, table: TableName) -> Self {
        Self { store, table }
    }

    pub async fn list(&self) -> Result<Vec<InventoryRecord>, TableStoreError> {
        let items = self
            .store
            .query_partition(&self.table, &inventory_partition())
            .await?;
        items
            .iter()
            .map(|item| InventoryRecord::from_item(item).map_err(TableStoreError::from))
            .collect()
    }

    pub async fn put(&self, record: &InventoryRecord) -> Result<(), TableStoreError> {
        self.store.put(&self.table, record.to_item()).await
    }
}
