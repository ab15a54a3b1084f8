//! Process configuration, read from the environment at startup.
//!
//! | Variable | Required | Meaning |
//! |---|---|---|
//! | `BUDGET_TABLE` | yes | ledger table name |
//! | `LOGISTICS_TABLE` | yes | inventory table name |
//! | `DATABASE_URL` | no | Postgres backend; in-memory when unset |
//! | `BIND_ADDR` | no | listen address, default `0.0.0.0:8080` |

use std::net::SocketAddr;

use thiserror::Error;

use crate::table_store::TableName;

pub const BUDGET_TABLE: &str = "BUDGET_TABLE";
pub const LOGISTICS_TABLE: &str = "LOGISTICS_TABLE";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const BIND_ADDR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),

    #[error("invalid value for `{name}`: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Storage backend selected by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    InMemory,
    Postgres { database_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub budget_table: TableName,
    pub logistics_table: TableName,
    pub backend: StorageBackend,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let budget_table = get(BUDGET_TABLE).ok_or(ConfigError::Missing(BUDGET_TABLE))?;
        let logistics_table = get(LOGISTICS_TABLE).ok_or(ConfigError::Missing(LOGISTICS_TABLE))?;

        let backend = match get(DATABASE_URL) {
            Some(database_url) => StorageBackend::Postgres { database_url },
            None => StorageBackend::InMemory,
        };

        let bind_addr = get(BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: BIND_ADDR,
                reason: e.to_string(),
            })?;

        Ok(Self {
            budget_table: TableName::new(budget_table),
            logistics_table: TableName::new(logistics_table),
            backend,
            bind_addr,
        })
    }
}
