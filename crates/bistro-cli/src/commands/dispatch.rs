use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: &Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Init(args) => commands::init::handle(args, ctx).await,
        Commands::Employees { action } => commands::employee::handle(action, ctx).await,
        Commands::Timesheets { employee, action } => {
            commands::timesheet::handle(*employee, action, ctx).await
        }
        Commands::Menus { action } => commands::menu::handle(action, ctx).await,
        Commands::MenuItems { menu, action } => {
            commands::menu_item::handle(*menu, action, ctx).await
        }
    }
}
