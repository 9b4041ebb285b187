//! Entity records for the four persisted row types.
//!
//! Every record keeps its fields private. Values enter through `hydrate`
//! (caller payloads or stored rows) or through the validating setters, and
//! leave through getters or `Serialize`, which always emits the storage key
//! spelling (`employee_id`, `menu_id`, `is_current_employee`).
//!
//! Records never hold references to one another; relationships are plain
//! integer keys resolved by the store.

mod employee;
mod menu;
mod menu_item;
mod timesheet;

pub use employee::Employee;
pub use menu::Menu;
pub use menu_item::MenuItem;
pub use timesheet::Timesheet;
