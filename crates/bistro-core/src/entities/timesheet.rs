use serde::Serialize;
use serde_json::Value;

use crate::enums::EntityKind;
use crate::errors::ValidationError;
use crate::fields;

/// Hours worked by an employee on a given date, paid at `rate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timesheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    hours: i64,
    rate: f64,
    date: i64,
    employee_id: i64,
}

impl Timesheet {
    /// Build a timesheet from a payload (`timesheetId`, `employeeId`) or a
    /// stored row (`id`, `employee_id`).
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised by a field.
    pub fn hydrate(data: &Value) -> Result<Self, ValidationError> {
        let data = fields::object(EntityKind::Timesheet, data)?;
        Ok(Self {
            id: fields::optional_identifier(
                "timesheetId",
                fields::pick(data, &["timesheetId", "id"]),
            )?,
            hours: fields::integer("hours", data.get("hours"))?,
            rate: fields::number("rate", data.get("rate"))?,
            date: fields::integer("date", data.get("date"))?,
            employee_id: fields::identifier(
                "employeeId",
                fields::pick(data, &["employeeId", "employee_id"]),
            )?,
        })
    }

    /// Apply a partial update of `hours`, `rate`, and `date`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on the first invalid field, leaving `self`
    /// unchanged.
    pub fn apply(&mut self, partial: &Value) -> Result<(), ValidationError> {
        let partial = fields::object(EntityKind::Timesheet, partial)?;
        let mut next = self.clone();
        if let Some(value) = partial.get("hours") {
            next.set_hours(value)?;
        }
        if let Some(value) = partial.get("rate") {
            next.set_rate(value)?;
        }
        if let Some(value) = partial.get("date") {
            next.set_date(value)?;
        }
        *self = next;
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    #[must_use]
    pub const fn date(&self) -> i64 {
        self.date
    }

    #[must_use]
    pub const fn employee_id(&self) -> i64 {
        self.employee_id
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is an integer or integer string.
    pub fn set_hours(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.hours = fields::integer("hours", Some(value))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is numeric.
    pub fn set_rate(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.rate = fields::number("rate", Some(value))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is an integer or integer string.
    pub fn set_date(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.date = fields::integer("date", Some(value))?;
        Ok(())
    }
}
