use serde::Serialize;
use serde_json::Value;

use crate::enums::EntityKind;
use crate::errors::ValidationError;
use crate::fields;

/// A named menu grouping menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    title: String,
}

impl Menu {
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised by a field.
    pub fn hydrate(data: &Value) -> Result<Self, ValidationError> {
        let data = fields::object(EntityKind::Menu, data)?;
        Ok(Self {
            id: fields::optional_identifier("menuId", fields::pick(data, &["menuId", "id"]))?,
            title: fields::text("title", data.get("title"))?,
        })
    }

    /// # Errors
    ///
    /// Returns `ValidationError` if `title` is present but not a string.
    pub fn apply(&mut self, partial: &Value) -> Result<(), ValidationError> {
        let partial = fields::object(EntityKind::Menu, partial)?;
        if let Some(value) = partial.get("title") {
            self.set_title(value)?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is a string.
    pub fn set_title(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.title = fields::text("title", Some(value))?;
        Ok(())
    }
}
