use std::collections::BTreeMap;
use std::sync::RwLock;

use soiree_core::{Attributes, Item, PartitionKey, SortKey};

use super::{TableName, TableStore, TableStoreError};

type Key = (TableName, PartitionKey, SortKey);

/// In-memory table store for tests/dev.
///
/// Keys live in a `BTreeMap`, so a partition scan comes back in sort-key order
/// just like the persistent backend.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    inner: RwLock<BTreeMap<Key, Attributes>>,
}

impl InMemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items across all tables.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> TableStoreError {
    TableStoreError::Unavailable("in-memory table lock poisoned".to_string())
}

#[async_trait::async_trait]
impl TableStore for InMemoryTableStore {
    async fn get(
        &self,
        table: &TableName,
        pk: &PartitionKey,
        sk: &SortKey,
    ) -> Result<Option<Item>, TableStoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let key = (table.clone(), pk.clone(), sk.clone());
        Ok(map.get(&key).map(|attributes| Item {
            pk: pk.clone(),
            sk: sk.clone(),
            attributes: attributes.clone(),
        }))
    }

    async fn put(&self, table: &TableName, item: Item) -> Result<(), TableStoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert((table.clone(), item.pk, item.sk), item.attributes);
        Ok(())
    }

    async fn query_partition(
        &self,
        table: &TableName,
        pk: &PartitionKey,
    ) -> Result<Vec<Item>, TableStoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map
            .iter()
            .filter(|((t, p, _), _)| t == table && p == pk)
            .map(|((_, p, s), attributes)| Item {
                pk: p.clone(),
                sk: s.clone(),
                attributes: attributes.clone(),
            })
            .collect())
    }
}
