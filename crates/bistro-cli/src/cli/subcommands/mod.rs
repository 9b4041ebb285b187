pub mod employee;
pub mod menu;
pub mod menu_item;
pub mod timesheet;

pub use employee::EmployeeCommands;
pub use menu::MenuCommands;
pub use menu_item::MenuItemCommands;
pub use timesheet::TimesheetCommands;
