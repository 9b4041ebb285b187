use serde::Serialize;
use serde_json::Value;

use crate::enums::EntityKind;
use crate::errors::ValidationError;
use crate::fields;

/// A member of staff. Removing an employee only clears `is_current_employee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    name: String,
    position: String,
    wage: i64,
    #[serde(serialize_with = "fields::serialize_flag")]
    is_current_employee: bool,
}

impl Employee {
    /// Build an employee from a payload or a stored row.
    ///
    /// Accepts `employeeId` or `id` for the key and `isCurrentEmployee` or
    /// `is_current_employee` for the flag, which defaults to 1.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised by a field.
    pub fn hydrate(data: &Value) -> Result<Self, ValidationError> {
        let data = fields::object(EntityKind::Employee, data)?;
        Ok(Self {
            id: fields::optional_identifier("employeeId", fields::pick(data, &["employeeId", "id"]))?,
            name: fields::text("name", data.get("name"))?,
            position: fields::text("position", data.get("position"))?,
            wage: fields::integer("wage", data.get("wage"))?,
            is_current_employee: fields::flag(
                "isCurrentEmployee",
                fields::pick(data, &["isCurrentEmployee", "is_current_employee"]),
            )?,
        })
    }

    /// Apply a partial update of `name`, `position`, and `wage`.
    ///
    /// Only keys present in `partial` are validated. Nothing changes unless
    /// every present key is valid. The key and the employment flag are never
    /// touched here.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on the first invalid field.
    pub fn apply(&mut self, partial: &Value) -> Result<(), ValidationError> {
        let partial = fields::object(EntityKind::Employee, partial)?;
        let mut next = self.clone();
        if let Some(value) = partial.get("name") {
            next.set_name(value)?;
        }
        if let Some(value) = partial.get("position") {
            next.set_position(value)?;
        }
        if let Some(value) = partial.get("wage") {
            next.set_wage(value)?;
        }
        *self = next;
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    #[must_use]
    pub const fn wage(&self) -> i64 {
        self.wage
    }

    #[must_use]
    pub const fn is_current_employee(&self) -> bool {
        self.is_current_employee
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is a string.
    pub fn set_name(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.name = fields::text("name", Some(value))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is a string.
    pub fn set_position(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.position = fields::text("position", Some(value))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is an integer or integer string.
    pub fn set_wage(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.wage = fields::integer("wage", Some(value))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is 0, 1, or null (meaning 1).
    pub fn set_is_current_employee(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.is_current_employee = fields::flag("isCurrentEmployee", Some(value))?;
        Ok(())
    }
}
