//! Repository modules, one per record.
//!
//! Each module extends `BistroService` with the create, read, list, update,
//! and delete operations for its table.

pub mod employee;
pub mod menu;
pub mod menu_item;
pub mod seed;
pub mod timesheet;
