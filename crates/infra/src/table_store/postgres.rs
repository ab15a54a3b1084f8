//! Postgres-backed table store.
//!
//! All logical tables share one physical table:
//!
//! ```text
//! kv_items(table_name, pk, sk, attributes jsonb, updated_at)
//!   PRIMARY KEY (table_name, pk, sk)
//! ```
//!
//! Writes are `INSERT ... ON CONFLICT DO UPDATE`, which gives last-write-wins
//! per key. SQLx errors map to `TableStoreError` as follows:
//!
//! | SQLx error | TableStoreError |
//! |---|---|
//! | `PoolTimedOut`, `PoolClosed`, `Io` | `Unavailable` |
//! | `ColumnDecode`, `Decode` | `Malformed` |
//! | anything else | `Backend` |

use std::sync::Arc;

use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::instrument;

use soiree_core::{Attributes, Item, PartitionKey, SortKey};

use super::{TableName, TableStore, TableStoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_items (
    table_name TEXT NOT NULL,
    pk TEXT NOT NULL,
    sk TEXT NOT NULL,
    attributes JSONB NOT NULL DEFAULT '{}'::jsonb,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (table_name, pk, sk)
)
"#;

#[derive(Debug, Clone)]
pub struct PostgresTableStore {
    pool: Arc<PgPool>,
}

impl PostgresTableStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect and make sure the backing table exists.
    pub async fn connect(database_url: &str) -> Result<Self, TableStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), TableStoreError> {
        sqlx::query(SCHEMA)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> TableStoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            TableStoreError::Unavailable(format!("{operation}: {err}"))
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            TableStoreError::Malformed(format!("{operation}: {err}"))
        }
        other => TableStoreError::Backend(format!("{operation}: {other}")),
    }
}

fn row_to_item(row: &PgRow) -> Result<Item, TableStoreError> {
    let pk: String = row.try_get("pk").map_err(|e| map_sqlx_error("decode pk", e))?;
    let sk: String = row.try_get("sk").map_err(|e| map_sqlx_error("decode sk", e))?;
    let attributes: JsonValue = row
        .try_get("attributes")
        .map_err(|e| map_sqlx_error("decode attributes", e))?;

    let attributes: Attributes = match attributes {
        JsonValue::Object(map) => map,
        other => {
            return Err(TableStoreError::Malformed(format!(
                "attributes of {pk}/{sk} are not an object: {other}"
            )));
        }
    };

    Ok(Item {
        pk: PartitionKey::new(pk),
        sk: SortKey::new(sk),
        attributes,
    })
}

#[async_trait::async_trait]
impl TableStore for PostgresTableStore {
    #[instrument(skip_all, fields(table = %table, pk = %pk, sk = %sk), err)]
    async fn get(
        &self,
        table: &TableName,
        pk: &PartitionKey,
        sk: &SortKey,
    ) -> Result<Option<Item>, TableStoreError> {
        let row = sqlx::query(
            r#"
            SELECT pk, sk, attributes
            FROM kv_items
            WHERE table_name = $1 AND pk = $2 AND sk = $3
            "#,
        )
        .bind(table.as_str())
        .bind(pk.as_str())
        .bind(sk.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("get", e))?;

        row.as_ref().map(row_to_item).transpose()
    }

    #[instrument(skip_all, fields(table = %table, pk = %item.pk, sk = %item.sk), err)]
    async fn put(&self, table: &TableName, item: Item) -> Result<(), TableStoreError> {
        sqlx::query(
            r#"
            INSERT INTO kv_items (table_name, pk, sk, attributes)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (table_name, pk, sk)
            DO UPDATE SET
                attributes = EXCLUDED.attributes,
                updated_at = NOW()
            "#,
        )
        .bind(table.as_str())
        .bind(item.pk.as_str())
        .bind(item.sk.as_str())
        .bind(JsonValue::Object(item.attributes))
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("put", e))?;

        Ok(())
    }

    #[instrument(skip_all, fields(table = %table, pk = %pk), err)]
    async fn query_partition(
        &self,
        table: &TableName,
        pk: &PartitionKey,
    ) -> Result<Vec<Item>, TableStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT pk, sk, attributes
            FROM kv_items
            WHERE table_name = $1 AND pk = $2
            ORDER BY sk ASC
            "#,
        )
        .bind(table.as_str())
        .bind(pk.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("query_partition", e))?;

        rows.iter().map(row_to_item).collect()
    }
}
