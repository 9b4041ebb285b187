//! Error types raised by entity records.
//!
//! Two kinds leave this crate: [`ValidationError`] when a field value breaks its
//! contract, and [`ExistenceError`] when a row or a parent row is missing, or when
//! dependent rows block a deletion. Storage faults are defined in `bistro-db` and
//! never mix with these.

use thiserror::Error;

use crate::enums::EntityKind;

/// A field was assigned a value that does not satisfy its contract.
///
/// The message always names the field and the expected shape, e.g.
/// `wage must be an integer`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {expected}")]
pub struct ValidationError {
    field: &'static str,
    expected: &'static str,
}

impl ValidationError {
    #[must_use]
    pub const fn new(field: &'static str, expected: &'static str) -> Self {
        Self { field, expected }
    }

    /// Name of the offending field, in caller-facing spelling.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

/// A lookup or a relationship guard could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExistenceError {
    /// No row matched the requested primary key, or a required parent is missing.
    #[error("{entity} not found")]
    NotFound { entity: EntityKind },

    /// The row still has dependent rows referencing it.
    #[error("{} has associated {}", .entity.label(), .dependents.plural_label())]
    HasDependents {
        entity: EntityKind,
        dependents: EntityKind,
    },
}

impl ExistenceError {
    #[must_use]
    pub const fn not_found(entity: EntityKind) -> Self {
        Self::NotFound { entity }
    }

    /// Whether this error means "no such row" as opposed to "blocked by dependents".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
