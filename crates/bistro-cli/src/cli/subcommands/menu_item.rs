use clap::Subcommand;

/// Menu item commands, scoped to `--menu`.
#[derive(Clone, Debug, Subcommand)]
pub enum MenuItemCommands {
    /// List the menu's items.
    List,
    /// Create a menu item from a JSON payload.
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update name, description, inventory, or price.
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Delete a menu item.
    Delete { id: i64 },
}
