use bistro_core::entities::Menu;

use crate::cli::subcommands::MenuCommands;
use crate::commands::shared::parse::parse_payload;
use crate::context::AppContext;
use crate::output::output_wrapped;

/// Handle `bistro menus`.
pub async fn handle(action: &MenuCommands, ctx: &AppContext) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        MenuCommands::List => {
            let menus = service.list_menus().await?;
            output_wrapped("menus", &menus, ctx.format)
        }
        MenuCommands::Get { id } => {
            let menu = service.get_menu(*id).await?;
            output_wrapped("menu", &menu, ctx.format)
        }
        MenuCommands::Create { data } => {
            let draft = Menu::hydrate(&parse_payload(data, "menu")?)?;
            let menu = service.create_menu(&draft).await?;
            output_wrapped("menu", &menu, ctx.format)
        }
        MenuCommands::Update { id, data } => {
            let partial = parse_payload(data, "menu")?;
            let menu = service.get_menu(*id).await?;
            let updated = service.update_menu(&menu, &partial).await?;
            output_wrapped("menu", &updated, ctx.format)
        }
        MenuCommands::Delete { id } => {
            let menu = service.get_menu(*id).await?;
            service.delete_menu(&menu).await?;
            tracing::info!(menu_id = *id, "menu deleted");
            Ok(())
        }
    }
}
