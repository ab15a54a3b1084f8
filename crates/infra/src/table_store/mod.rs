//! Partitioned key-value table storage.
//!
//! Items are addressed by `(table, partition key, sort key)`. Besides point
//! reads and writes the only supported access is a scan of one partition,
//! returned in sort-key order. There are no cross-key transactions.

pub mod in_memory;
pub mod postgres;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use soiree_core::{DomainError, Item, PartitionKey, SortKey};

pub use in_memory::InMemoryTableStore;
pub use postgres::PostgresTableStore;

/// Name of a logical table (one per store: ledger, inventory).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TableName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum TableStoreError {
    /// The backend could not be reached (closed pool, timeout, IO).
    #[error("table store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed the operation.
    #[error("table store backend error: {0}")]
    Backend(String),

    /// A stored row could not be mapped to a record.
    #[error("malformed item: {0}")]
    Malformed(String),
}

impl From<DomainError> for TableStoreError {
    fn from(value: DomainError) -> Self {
        TableStoreError::Malformed(value.to_string())
    }
}

#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    async fn get(
        &self,
        table: &TableName,
        pk: &PartitionKey,
        sk: &SortKey,
    ) -> Result<Option<Item>, TableStoreError>;

    /// Insert or fully replace the item with the same key (last write wins).
    async fn put(&self, table: &TableName, item: Item) -> Result<(), TableStoreError>;

    /// All items of one partition, ordered by sort key.
    async fn query_partition(
        &self,
        table: &TableName,
        pk: &PartitionKey,
    ) -> Result<Vec<Item>, TableStoreError>;
}

#[async_trait::async_trait]
impl<S> TableStore for Arc<S>
where
    S: TableStore + ?Sized,
{
    async fn get(
        &self,
        table: &TableName,
        pk: &PartitionKey,
        sk: &SortKey,
    ) -> Result<Option<Item>, TableStoreError> {
        (**self).get(table, pk, sk).await
    }

    async fn put(&self, table: &TableName, item: Item) -> Result<(), TableStoreError> {
        (**self).put(table, item).await
    }

    async fn query_partition(
        &self,
        table: &TableName,
        pk: &PartitionKey,
    ) -> Result<Vec<Item>, TableStoreError> {
        (**self).query_partition(table, pk).await
    }
}
