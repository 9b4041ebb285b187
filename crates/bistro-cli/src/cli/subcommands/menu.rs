use clap::Subcommand;

/// Menu commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MenuCommands {
    /// List all menus.
    List,
    /// Get a menu by ID.
    Get { id: i64 },
    /// Create a menu from a JSON payload.
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update a menu's title.
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Delete a menu with no menu items.
    Delete { id: i64 },
}
