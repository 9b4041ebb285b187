//! Employee repository: CRUD with soft delete.

use bistro_core::entities::Employee;
use bistro_core::enums::EntityKind;
use bistro_core::errors::ExistenceError;
use serde_json::Value;

use crate::error::DatabaseError;
use crate::helpers::{hydrate_row, insert_returning_id, require_id};
use crate::service::BistroService;

const COLUMNS: &[&str] = &["id", "name", "position", "wage", "is_current_employee"];
const SELECT_COLS: &str = "id, name, position, wage, is_current_employee";

fn row_to_employee(row: &libsql::Row) -> Result<Employee, DatabaseError> {
    hydrate_row(EntityKind::Employee, row, COLUMNS, Employee::hydrate)
}

impl BistroService {
    /// Insert `employee` and return the stored row.
    ///
    /// The store assigns the id; any id on `employee` is ignored.
    pub async fn create_employee(&self, employee: &Employee) -> Result<Employee, DatabaseError> {
        let id = insert_returning_id(
            self.db().conn(),
            "INSERT INTO Employee (name, position, wage, is_current_employee)
             VALUES (?1, ?2, ?3, ?4) RETURNING id",
            libsql::params![
                employee.name(),
                employee.position(),
                employee.wage(),
                i64::from(employee.is_current_employee())
            ],
        )
        .await?
        .ok_or(DatabaseError::NoResult)?;
        tracing::debug!(employee_id = id, "employee created");

        self.get_employee(id).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM Employee WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(ExistenceError::not_found(EntityKind::Employee))?;
        row_to_employee(&row)
    }

    /// All employees whose `is_current_employee` flag is set.
    pub async fn list_current_employees(&self) -> Result<Vec<Employee>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM Employee WHERE is_current_employee = 1 ORDER BY id"
                ),
                (),
            )
            .await?;

        let mut employees = Vec::new();
        while let Some(row) = rows.next().await? {
            employees.push(row_to_employee(&row)?);
        }
        Ok(employees)
    }

    /// Apply `partial` to `employee` and store the result.
    ///
    /// Only `name`, `position`, and `wage` can change. The employment flag is
    /// left as stored.
    pub async fn update_employee(
        &self,
        employee: &Employee,
        partial: &Value,
    ) -> Result<Employee, DatabaseError> {
        let id = require_id(EntityKind::Employee, employee.id())?;
        let mut next = employee.clone();
        next.apply(partial)?;

        self.db()
            .conn()
            .execute(
                "UPDATE Employee SET name = ?1, position = ?2, wage = ?3 WHERE id = ?4",
                libsql::params![next.name(), next.position(), next.wage(), id],
            )
            .await?;
        tracing::debug!(employee_id = id, "employee updated");

        self.get_employee(id).await
    }

    /// Soft delete: clear `is_current_employee` and return the stored row.
    pub async fn delete_employee(&self, employee: &Employee) -> Result<Employee, DatabaseError> {
        let id = require_id(EntityKind::Employee, employee.id())?;

        self.db()
            .conn()
            .execute(
                "UPDATE Employee SET is_current_employee = 0 WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        tracing::debug!(employee_id = id, "employee retired");

        self.get_employee(id).await
    }
}
