use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    EmployeeCommands, MenuCommands, MenuItemCommands, TimesheetCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the database schema.
    Init(InitArgs),
    /// Employees.
    Employees {
        #[command(subcommand)]
        action: EmployeeCommands,
    },
    /// Timesheets of one employee.
    Timesheets {
        /// Owning employee ID.
        #[arg(long)]
        employee: i64,
        #[command(subcommand)]
        action: TimesheetCommands,
    },
    /// Menus.
    Menus {
        #[command(subcommand)]
        action: MenuCommands,
    },
    /// Menu items of one menu.
    MenuItems {
        /// Owning menu ID.
        #[arg(long)]
        menu: i64,
        #[command(subcommand)]
        action: MenuItemCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Insert starter records into an empty database.
    #[arg(long)]
    pub seed: bool,
}
