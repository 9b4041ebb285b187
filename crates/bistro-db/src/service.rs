//! Service layer over the database handle.
//!
//! `BistroService` wraps `BistroDb`. All repo and guard methods are
//! implemented as `impl BistroService` blocks in their own modules.

use crate::BistroDb;
use crate::error::DatabaseError;

/// Entry point for every record operation.
///
/// Operations are independent async calls against one shared connection.
/// There are no multi-statement transactions.
pub struct BistroService {
    db: BistroDb,
}

impl BistroService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = BistroDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `BistroDb`.
    #[must_use]
    pub const fn from_db(db: BistroDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &BistroDb {
        &self.db
    }
}
