//! Error types for the storage contract.
//!
//! [`StoreError::NotFound`] is the distinguished "absent" condition that
//! handlers turn into a 404. Everything else is either corrupted stored data
//! ([`StoreError::Parse`]) or an operational failure of the key-value backend
//! ([`StoreError::Backend`]).

use thiserror::Error;

/// Failure reported by a [`crate::domain::repositories::KvBackend`].
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend could not be reached.
    #[error("backend connection error: {0}")]
    Connection(String),

    /// The backend rejected or failed a command.
    #[error("backend operation error: {0}")]
    Operation(String),

    /// A hash field targeted by an increment does not hold an integer.
    #[error("hash field {field:?} of {key:?} is not an integer")]
    NotAnInteger { key: String, field: String },
}

/// Malformed counter data found while reading a hit record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HitsParseError {
    #[error("hit field name {0:?} is not an integer")]
    InvalidField(String),

    #[error("hit counter {field:?} holds non-integer value {value:?}")]
    InvalidValue { field: String, value: String },

    #[error("day-of-year {0} is outside the supported calendar range")]
    DayOutOfRange(i64),
}

/// Errors surfaced by [`crate::domain::repositories::UrlStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested key or hash does not exist.
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Parse(#[from] HitsParseError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
