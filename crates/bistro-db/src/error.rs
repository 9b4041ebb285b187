//! Database error types for bistro-db.

use bistro_core::errors::{ExistenceError, ValidationError};
use thiserror::Error;

/// Errors from store operations.
///
/// `Validation` and `Existence` are the two outcomes a caller is expected to
/// handle. Every other variant is a storage fault.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A field value failed validation before anything was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A row, a required parent row, or the absence of dependents was missing.
    #[error(transparent)]
    Existence(#[from] ExistenceError),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// HTTP status a boundary layer should answer with.
    ///
    /// | outcome                 | status |
    /// |-------------------------|--------|
    /// | validation failure      | 400    |
    /// | not found               | 404    |
    /// | has dependent rows      | 400    |
    /// | anything else           | 500    |
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Existence(e) if e.is_not_found() => 404,
            Self::Existence(_) => 400,
            _ => 500,
        }
    }

    /// The existence failure carried by this error, if any.
    #[must_use]
    pub const fn as_existence(&self) -> Option<&ExistenceError> {
        match self {
            Self::Existence(e) => Some(e),
            _ => None,
        }
    }
}
