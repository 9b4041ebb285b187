pub mod dispatch;
pub mod employee;
pub mod init;
pub mod menu;
pub mod menu_item;
pub mod shared;
pub mod timesheet;
