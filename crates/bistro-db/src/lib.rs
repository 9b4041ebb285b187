//! # bistro-db
//!
//! libSQL persistence for Bistro records.
//!
//! Holds the four tables (`Employee`, `Timesheet`, `Menu`, `MenuItem`), one
//! repo module per record, and the relationship guards that run before any
//! write touching a foreign key. Foreign keys are also enforced by the store,
//! and a violation raised by a write is reported as the same existence error
//! the guard would have produced.

pub mod error;
mod guards;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: one libSQL database and one connection.
pub struct BistroDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl BistroDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Enables foreign keys on the connection and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let bistro_db = Self { db, conn };
        bistro_db.run_migrations().await?;
        tracing::info!(path, "database opened");
        Ok(bistro_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
