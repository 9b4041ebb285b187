//! Timesheet repository. Every write is guarded by the owning employee.

use bistro_core::entities::Timesheet;
use bistro_core::enums::EntityKind;
use bistro_core::errors::ExistenceError;
use serde_json::Value;

use crate::error::DatabaseError;
use crate::guards::translate_fk;
use crate::helpers::{hydrate_row, insert_returning_id, require_id};
use crate::service::BistroService;

const COLUMNS: &[&str] = &["id", "hours", "rate", "date", "employee_id"];
const SELECT_COLS: &str = "id, hours, rate, date, employee_id";

fn row_to_timesheet(row: &libsql::Row) -> Result<Timesheet, DatabaseError> {
    hydrate_row(EntityKind::Timesheet, row, COLUMNS, Timesheet::hydrate)
}

impl BistroService {
    pub async fn create_timesheet(&self, timesheet: &Timesheet) -> Result<Timesheet, DatabaseError> {
        let employee_id = timesheet.employee_id();
        self.require_employee(employee_id).await?;

        let id = insert_returning_id(
            self.db().conn(),
            "INSERT INTO Timesheet (hours, rate, date, employee_id)
             VALUES (?1, ?2, ?3, ?4) RETURNING id",
            libsql::params![
                timesheet.hours(),
                timesheet.rate(),
                timesheet.date(),
                employee_id
            ],
        )
        .await
        .map_err(|e| translate_fk(e, ExistenceError::not_found(EntityKind::Employee)))?
        .ok_or(DatabaseError::NoResult)?;
        tracing::debug!(timesheet_id = id, employee_id, "timesheet created");

        self.get_timesheet(id).await
    }

    pub async fn get_timesheet(&self, id: i64) -> Result<Timesheet, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM Timesheet WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(ExistenceError::not_found(EntityKind::Timesheet))?;
        row_to_timesheet(&row)
    }

    /// Timesheets of one employee. Fails if the employee does not exist.
    pub async fn list_timesheets(&self, employee_id: i64) -> Result<Vec<Timesheet>, DatabaseError> {
        self.require_employee(employee_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM Timesheet WHERE employee_id = ?1 ORDER BY id"),
                libsql::params![employee_id],
            )
            .await?;

        let mut timesheets = Vec::new();
        while let Some(row) = rows.next().await? {
            timesheets.push(row_to_timesheet(&row)?);
        }
        Ok(timesheets)
    }

    /// Apply `partial` (`hours`, `rate`, `date`) and store the result.
    pub async fn update_timesheet(
        &self,
        timesheet: &Timesheet,
        partial: &Value,
    ) -> Result<Timesheet, DatabaseError> {
        let id = require_id(EntityKind::Timesheet, timesheet.id())?;
        let mut next = timesheet.clone();
        next.apply(partial)?;
        self.require_employee(next.employee_id()).await?;

        self.db()
            .conn()
            .execute(
                "UPDATE Timesheet SET hours = ?1, rate = ?2, date = ?3 WHERE id = ?4",
                libsql::params![next.hours(), next.rate(), next.date(), id],
            )
            .await?;
        tracing::debug!(timesheet_id = id, "timesheet updated");

        self.get_timesheet(id).await
    }

    pub async fn delete_timesheet(&self, timesheet: &Timesheet) -> Result<(), DatabaseError> {
        let id = require_id(EntityKind::Timesheet, timesheet.id())?;
        self.require_employee(timesheet.employee_id()).await?;

        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM Timesheet WHERE id = ?1", libsql::params![id])
            .await?;
        if affected == 0 {
            return Err(ExistenceError::not_found(EntityKind::Timesheet).into());
        }
        tracing::debug!(timesheet_id = id, "timesheet deleted");
        Ok(())
    }
}
