//! Starter records for a fresh database.

use bistro_core::entities::{Employee, Menu, MenuItem, Timesheet};
use serde_json::json;

use crate::error::DatabaseError;
use crate::service::BistroService;

impl BistroService {
    /// Insert one employee with a timesheet and one menu with a menu item.
    ///
    /// Does nothing if any employee already exists. Returns whether rows
    /// were written.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails.
    pub async fn seed_defaults(&self) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM Employee", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        if row.get::<i64>(0)? > 0 {
            tracing::debug!("employees present, skipping seed");
            return Ok(false);
        }

        let employee = self
            .create_employee(&Employee::hydrate(&json!({
                "name": "Employee 1",
                "position": "Manager",
                "wage": 10
            }))?)
            .await?;
        let employee_id = employee.id().ok_or(DatabaseError::NoResult)?;
        self.create_timesheet(&Timesheet::hydrate(&json!({
            "hours": 10,
            "rate": 15.5,
            "date": 1_506_100_907_820_i64,
            "employeeId": employee_id
        }))?)
        .await?;

        let menu = self
            .create_menu(&Menu::hydrate(&json!({ "title": "Breakfast" }))?)
            .await?;
        let menu_id = menu.id().ok_or(DatabaseError::NoResult)?;
        self.create_menu_item(&MenuItem::hydrate(&json!({
            "name": "Menu 1 Item 1 Name",
            "description": "Menu 1 Item 1 Description",
            "inventory": 10,
            "price": 2.5,
            "menuId": menu_id
        }))?)
        .await?;

        tracing::info!(employee_id, menu_id, "seeded default records");
        Ok(true)
    }
}
