//! Store error model.

use thiserror::Error;

/// Result type used by the collection store.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a collection lookup or mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The collection name is not one of the known kinds.
    #[error("unknown collection kind: {0}")]
    UnknownKind(String),

    /// The value to replace or remove is not present in the collection.
    #[error("not found")]
    NotFound,
}

impl StoreError {
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownKind(name.into())
    }
}
