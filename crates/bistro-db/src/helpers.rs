//! Row-to-record parsing helpers.
//!
//! Rows are turned into a JSON object keyed by column name and handed to the
//! record's own `hydrate`, so stored rows pass through exactly the same field
//! validators as caller payloads.

use bistro_core::enums::EntityKind;
use bistro_core::errors::ValidationError;
use serde_json::{Map, Number, Value};

use crate::error::DatabaseError;

/// Convert one libSQL cell to JSON.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for non-finite reals and blobs, neither
/// of which any Bistro column stores.
pub fn sql_to_json(value: libsql::Value) -> Result<Value, DatabaseError> {
    match value {
        libsql::Value::Null => Ok(Value::Null),
        libsql::Value::Integer(i) => Ok(Value::from(i)),
        libsql::Value::Real(f) => Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| DatabaseError::InvalidState(format!("non-finite real {f}"))),
        libsql::Value::Text(s) => Ok(Value::String(s)),
        libsql::Value::Blob(_) => Err(DatabaseError::InvalidState(
            "unexpected blob column".into(),
        )),
    }
}

/// Read `columns` (in SELECT order) out of `row` as a JSON object.
///
/// # Errors
///
/// Returns `DatabaseError` if a column read fails or holds an unsupported value.
pub fn row_to_json(row: &libsql::Row, columns: &[&str]) -> Result<Value, DatabaseError> {
    let mut map = Map::with_capacity(columns.len());
    for (idx, column) in (0_i32..).zip(columns) {
        map.insert((*column).to_string(), sql_to_json(row.get_value(idx)?)?);
    }
    Ok(Value::Object(map))
}

/// Hydrate a record from a stored row.
///
/// A stored row that fails validation is a corrupt store, not caller error,
/// so it surfaces as `InvalidState` rather than `Validation`.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the row does not validate.
pub fn hydrate_row<T>(
    kind: EntityKind,
    row: &libsql::Row,
    columns: &[&str],
    hydrate: fn(&Value) -> Result<T, ValidationError>,
) -> Result<T, DatabaseError> {
    let data = row_to_json(row, columns)?;
    hydrate(&data).map_err(|e| DatabaseError::InvalidState(format!("stored {kind} row: {e}")))
}

/// The primary key of a record that must already be persisted.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the record was never persisted.
pub fn require_id(kind: EntityKind, id: Option<i64>) -> Result<i64, DatabaseError> {
    id.ok_or_else(|| DatabaseError::InvalidState(format!("{kind} has no id")))
}

/// Run an `INSERT ... RETURNING id` and read the id of the inserted row.
///
/// The id comes from the statement itself, so concurrent inserts on the same
/// connection cannot hand back each other's rows. Returns `None` only if the
/// statement produced no row.
///
/// # Errors
///
/// Returns the libSQL error from preparing or stepping the statement, so
/// callers can translate constraint violations.
pub async fn insert_returning_id(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<Option<i64>, libsql::Error> {
    let mut rows = conn.query(sql, params).await?;
    match rows.next().await? {
        Some(row) => row.get::<i64>(0).map(Some),
        None => Ok(None),
    }
}

/// Detect a foreign-key violation reported by `SQLite`.
///
/// Matches on the message because libSQL does not expose extended result codes
/// uniformly across its local and remote backends.
pub fn is_foreign_key_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("FOREIGN KEY constraint failed")
}
