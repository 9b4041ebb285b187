use clap::Subcommand;

/// Employee commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmployeeCommands {
    /// List current employees.
    List,
    /// Get an employee by ID.
    Get { id: i64 },
    /// Create an employee from a JSON payload.
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update name, position, or wage.
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Mark an employee as no longer current.
    Delete { id: i64 },
}
