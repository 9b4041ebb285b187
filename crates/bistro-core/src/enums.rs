//! Entity kinds for Bistro.
//!
//! `EntityKind` names each of the four record types and drives error messages.

use std::fmt;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The four persisted record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Employee,
    Timesheet,
    Menu,
    MenuItem,
}

impl EntityKind {
    /// Type name as used in "not found" messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Timesheet => "Timesheet",
            Self::Menu => "Menu",
            Self::MenuItem => "MenuItem",
        }
    }

    /// Lower-case singular label, e.g. `menu item`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Timesheet => "timesheet",
            Self::Menu => "menu",
            Self::MenuItem => "menu item",
        }
    }

    /// Lower-case plural label, e.g. `menu items`.
    #[must_use]
    pub const fn plural_label(self) -> &'static str {
        match self {
            Self::Employee => "employees",
            Self::Timesheet => "timesheets",
            Self::Menu => "menus",
            Self::MenuItem => "menu items",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
