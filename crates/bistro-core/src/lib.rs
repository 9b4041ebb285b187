//! # bistro-core
//!
//! Entity records, field validators, and error types for Bistro.
//!
//! This crate holds everything that can be checked without touching storage:
//! - Entity records for employees, timesheets, menus, and menu items
//! - One validator per field kind, shared by every record
//! - The two error kinds the store hands back to callers
//! - Entity kinds used in messages and table names

pub mod entities;
pub mod enums;
pub mod errors;
pub mod fields;
