//! Strongly-typed table keys.
//!
//! Every stored item is addressed by a partition key plus a sort key. The
//! ledger partitions by calendar year; inventory uses a single fixed partition.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Partition key of a table item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionKey(String);

/// Sort key of a table item (unique within its partition).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKey(String);

macro_rules! impl_string_key {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_string_key!(PartitionKey);
impl_string_key!(SortKey);

/// Calendar year that owns a ledger partition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    /// Ledger partition for this year (the decimal year string, e.g. `"2024"`).
    pub fn partition_key(self) -> PartitionKey {
        PartitionKey(self.0.to_string())
    }
}

impl core::fmt::Display for Year {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl FromStr for Year {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year = s
            .trim()
            .parse::<i32>()
            .map_err(|e| DomainError::validation(format!("Year: {e}")))?;
        Ok(Self(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_partition_key_is_decimal_string() {
        assert_eq!(Year::new(2024).partition_key(), PartitionKey::new("2024"));
    }

    #[test]
    fn year_parses_from_string() {
        assert_eq!("2031".parse::<Year>().unwrap(), Year::new(2031));
        assert!(matches!("next".parse::<Year>(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn sort_keys_order_lexicographically() {
        let mut keys = vec![SortKey::new("party#2024-07-04"), SortKey::new("budget"), SortKey::new("party#2024-01-01")];
        keys.sort();
        assert_eq!(
            keys.iter().map(SortKey::as_str).collect::<Vec<_>>(),
            vec!["budget", "party#2024-01-01", "party#2024-07-04"]
        );
    }
}
