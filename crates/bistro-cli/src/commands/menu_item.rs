use bistro_core::entities::MenuItem;

use crate::cli::subcommands::MenuItemCommands;
use crate::commands::shared::parse::{parse_payload, with_scope};
use crate::context::AppContext;
use crate::output::output_wrapped;

/// Handle `bistro menu-items --menu <id>`.
pub async fn handle(menu_id: i64, action: &MenuItemCommands, ctx: &AppContext) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        MenuItemCommands::List => {
            let items = service.list_menu_items(menu_id).await?;
            output_wrapped("menuItems", &items, ctx.format)
        }
        MenuItemCommands::Create { data } => {
            let payload = with_scope(parse_payload(data, "menuItem")?, "menuId", menu_id);
            let draft = MenuItem::hydrate(&payload)?;
            let item = service.create_menu_item(&draft).await?;
            output_wrapped("menuItem", &item, ctx.format)
        }
        MenuItemCommands::Update { id, data } => {
            let partial = parse_payload(data, "menuItem")?;
            service.get_menu(menu_id).await?;
            let item = service.get_menu_item(*id).await?;
            let updated = service.update_menu_item(&item, &partial).await?;
            output_wrapped("menuItem", &updated, ctx.format)
        }
        MenuItemCommands::Delete { id } => {
            let item = service.get_menu_item(*id).await?;
            service.get_menu(menu_id).await?;
            service.delete_menu_item(&item).await?;
            tracing::info!(menu_item_id = *id, "menu item deleted");
            Ok(())
        }
    }
}
