//! Store error model.

use thiserror::Error;

/// Result type used across the store.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Keep this focused on the three deterministic failure kinds the store has
/// (bad input, missing item, file trouble). Anything else propagates as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An input was out of range or malformed (e.g. negative quantity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced item is absent from stock.
    #[error("item not found: {0}")]
    NotFound(String),

    /// Reading or writing the persisted file failed.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl StoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
