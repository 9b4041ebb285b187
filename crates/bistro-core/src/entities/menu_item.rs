use serde::Serialize;
use serde_json::Value;

use crate::enums::EntityKind;
use crate::errors::ValidationError;
use crate::fields;

/// A dish on a menu, with stock on hand and a price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    inventory: i64,
    price: f64,
    menu_id: i64,
}

impl MenuItem {
    /// Build a menu item from a payload (`menuItemId`, `menuId`) or a stored
    /// row (`id`, `menu_id`).
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised by a field.
    pub fn hydrate(data: &Value) -> Result<Self, ValidationError> {
        let data = fields::object(EntityKind::MenuItem, data)?;
        Ok(Self {
            id: fields::optional_identifier("menuItemId", fields::pick(data, &["menuItemId", "id"]))?,
            name: fields::text("name", data.get("name"))?,
            description: fields::optional_text("description", data.get("description"))?,
            inventory: fields::integer("inventory", data.get("inventory"))?,
            price: fields::number("price", data.get("price"))?,
            menu_id: fields::identifier("menuId", fields::pick(data, &["menuId", "menu_id"]))?,
        })
    }

    /// Apply a partial update of `name`, `description`, `inventory`, and
    /// `price`. A `null` description clears it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` on the first invalid field, leaving `self`
    /// unchanged.
    pub fn apply(&mut self, partial: &Value) -> Result<(), ValidationError> {
        let partial = fields::object(EntityKind::MenuItem, partial)?;
        let mut next = self.clone();
        if let Some(value) = partial.get("name") {
            next.set_name(value)?;
        }
        if let Some(value) = partial.get("description") {
            next.set_description(value)?;
        }
        if let Some(value) = partial.get("inventory") {
            next.set_inventory(value)?;
        }
        if let Some(value) = partial.get("price") {
            next.set_price(value)?;
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
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn inventory(&self) -> i64 {
        self.inventory
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub const fn menu_id(&self) -> i64 {
        self.menu_id
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
    /// Returns `ValidationError` unless `value` is a string or null.
    pub fn set_description(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.description = fields::optional_text("description", Some(value))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is an integer or integer string.
    pub fn set_inventory(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.inventory = fields::integer("inventory", Some(value))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ValidationError` unless `value` is numeric.
    pub fn set_price(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.price = fields::number("price", Some(value))?;
        Ok(())
    }
}
