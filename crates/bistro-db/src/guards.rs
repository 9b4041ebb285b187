//! Relationship guards.
//!
//! Checked before any write that depends on another table:
//! - timesheets need their employee
//! - menu items need their menu
//! - a menu with menu items cannot be deleted
//!
//! The check and the write are separate statements. A parent removed in
//! between is still caught by the store's foreign keys; `translate_fk` maps
//! that violation onto the error the guard would have raised.

use bistro_core::entities::{Employee, Menu};
use bistro_core::enums::EntityKind;
use bistro_core::errors::ExistenceError;

use crate::error::DatabaseError;
use crate::service::BistroService;

/// Error raised when a menu still has menu items.
pub(crate) const MENU_HAS_ITEMS: ExistenceError = ExistenceError::HasDependents {
    entity: EntityKind::Menu,
    dependents: EntityKind::MenuItem,
};

impl BistroService {
    /// Resolve the employee a timesheet points at.
    pub(crate) async fn require_employee(&self, employee_id: i64) -> Result<Employee, DatabaseError> {
        self.get_employee(employee_id).await.inspect_err(|error| {
            tracing::warn!(employee_id, %error, "timesheet guard rejected write");
        })
    }

    /// Resolve the menu a menu item points at.
    pub(crate) async fn require_menu(&self, menu_id: i64) -> Result<Menu, DatabaseError> {
        self.get_menu(menu_id).await.inspect_err(|error| {
            tracing::warn!(menu_id, %error, "menu item guard rejected write");
        })
    }

    /// Fail if any menu item still references `menu_id`.
    pub(crate) async fn ensure_menu_has_no_items(&self, menu_id: i64) -> Result<(), DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM MenuItem WHERE menu_id = ?1",
                libsql::params![menu_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        if count > 0 {
            tracing::warn!(menu_id, count, "menu delete blocked by menu items");
            return Err(MENU_HAS_ITEMS.into());
        }
        Ok(())
    }
}

/// Map a foreign-key violation to `violation`; pass other errors through.
pub(crate) fn translate_fk(error: libsql::Error, violation: ExistenceError) -> DatabaseError {
    if crate::helpers::is_foreign_key_violation(&error) {
        tracing::warn!(%error, "foreign key rejected write after guard passed");
        DatabaseError::Existence(violation)
    } else {
        DatabaseError::LibSql(error)
    }
}
