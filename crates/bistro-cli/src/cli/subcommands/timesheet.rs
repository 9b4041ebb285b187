use clap::Subcommand;

/// Timesheet commands, scoped to `--employee`.
#[derive(Clone, Debug, Subcommand)]
pub enum TimesheetCommands {
    /// List the employee's timesheets.
    List,
    /// Create a timesheet from a JSON payload.
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update hours, rate, or date.
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Delete a timesheet.
    Delete { id: i64 },
}
