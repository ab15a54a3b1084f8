//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures while mapping stored items to
/// records. Storage and transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed key).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An item was read from the wrong partition or with an unexpected sort key.
    #[error("unexpected key: {0}")]
    UnexpectedKey(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unexpected_key(msg: impl Into<String>) -> Self {
        Self::UnexpectedKey(msg.into())
    }
}
