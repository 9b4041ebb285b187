//! Menu item repository. Every write is guarded by the owning menu.

use bistro_core::entities::MenuItem;
use bistro_core::enums::EntityKind;
use bistro_core::errors::ExistenceError;
use serde_json::Value;

use crate::error::DatabaseError;
use crate::guards::translate_fk;
use crate::helpers::{hydrate_row, insert_returning_id, require_id};
use crate::service::BistroService;

const COLUMNS: &[&str] = &["id", "name", "description", "inventory", "price", "menu_id"];
const SELECT_COLS: &str = "id, name, description, inventory, price, menu_id";

fn row_to_menu_item(row: &libsql::Row) -> Result<MenuItem, DatabaseError> {
    hydrate_row(EntityKind::MenuItem, row, COLUMNS, MenuItem::hydrate)
}

impl BistroService {
    pub async fn create_menu_item(&self, item: &MenuItem) -> Result<MenuItem, DatabaseError> {
        let menu_id = item.menu_id();
        self.require_menu(menu_id).await?;

        let id = insert_returning_id(
            self.db().conn(),
            "INSERT INTO MenuItem (name, description, inventory, price, menu_id)
             VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
            libsql::params![
                item.name(),
                item.description(),
                item.inventory(),
                item.price(),
                menu_id
            ],
        )
        .await
        .map_err(|e| translate_fk(e, ExistenceError::not_found(EntityKind::Menu)))?
        .ok_or(DatabaseError::NoResult)?;
        tracing::debug!(menu_item_id = id, menu_id, "menu item created");

        self.get_menu_item(id).await
    }

    pub async fn get_menu_item(&self, id: i64) -> Result<MenuItem, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM MenuItem WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(ExistenceError::not_found(EntityKind::MenuItem))?;
        row_to_menu_item(&row)
    }

    /// Menu items of one menu. Fails if the menu does not exist.
    pub async fn list_menu_items(&self, menu_id: i64) -> Result<Vec<MenuItem>, DatabaseError> {
        self.require_menu(menu_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM MenuItem WHERE menu_id = ?1 ORDER BY id"),
                libsql::params![menu_id],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_menu_item(&row)?);
        }
        Ok(items)
    }

    pub async fn update_menu_item(
        &self,
        item: &MenuItem,
        partial: &Value,
    ) -> Result<MenuItem, DatabaseError> {
        let id = require_id(EntityKind::MenuItem, item.id())?;
        let mut next = item.clone();
        next.apply(partial)?;
        self.require_menu(next.menu_id()).await?;

        self.db()
            .conn()
            .execute(
                "UPDATE MenuItem SET name = ?1, description = ?2, inventory = ?3, price = ?4
                 WHERE id = ?5",
                libsql::params![
                    next.name(),
                    next.description(),
                    next.inventory(),
                    next.price(),
                    id
                ],
            )
            .await?;
        tracing::debug!(menu_item_id = id, "menu item updated");

        self.get_menu_item(id).await
    }

    pub async fn delete_menu_item(&self, item: &MenuItem) -> Result<(), DatabaseError> {
        let id = require_id(EntityKind::MenuItem, item.id())?;
        self.require_menu(item.menu_id()).await?;

        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM MenuItem WHERE id = ?1", libsql::params![id])
            .await?;
        if affected == 0 {
            return Err(ExistenceError::not_found(EntityKind::MenuItem).into());
        }
        tracing::debug!(menu_item_id = id, "menu item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_menu, seed_menu_item, test_service};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn create_menu_item_without_description() {
        let svc = test_service().await;
        let menu_id = seed_menu(&svc).await.id().unwrap();

        let draft = MenuItem::hydrate(&json!({
            "name": "Toast",
            "inventory": "12",
            "price": "2.5",
            "menuId": menu_id
        }))
        .unwrap();
        let created = svc.create_menu_item(&draft).await.unwrap();
        assert_eq!(created.name(), "Toast");
        assert_eq!(created.description(), None);
        assert_eq!(created.inventory(), 12);
        assert_eq!(created.menu_id(), menu_id);

        let listed = svc.list_menu_items(menu_id).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn create_for_missing_menu_is_not_found() {
        let svc = test_service().await;
        let draft = MenuItem::hydrate(&json!({
            "name": "Toast",
            "inventory": 1,
            "price": 1,
            "menuId": 3
        }))
        .unwrap();

        let err = svc.create_menu_item(&draft).await.unwrap_err();
        assert_eq!(err.to_string(), "Menu not found");
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn list_for_missing_menu_is_not_found() {
        let svc = test_service().await;
        let err = svc.list_menu_items(8).await.unwrap_err();
        assert!(err.as_existence().is_some_and(ExistenceError::is_not_found));
    }

    #[tokio::test]
    async fn update_clears_description() {
        let svc = test_service().await;
        let menu_id = seed_menu(&svc).await.id().unwrap();
        let item = seed_menu_item(&svc, menu_id).await;
        assert!(item.description().is_some());

        let updated = svc
            .update_menu_item(&item, &json!({ "description": null, "inventory": 0 }))
            .await
            .unwrap();
        assert_eq!(updated.description(), None);
        assert_eq!(updated.inventory(), 0);
        assert_eq!(updated.name(), item.name());
    }

    #[tokio::test]
    async fn invalid_update_writes_nothing() {
        let svc = test_service().await;
        let menu_id = seed_menu(&svc).await.id().unwrap();
        let item = seed_menu_item(&svc, menu_id).await;

        let err = svc
            .update_menu_item(&item, &json!({ "name": "Waffles", "price": "cheap" }))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "price must be a number");

        let stored = svc.get_menu_item(item.id().unwrap()).await.unwrap();
        assert_eq!(stored, item);
    }

    #[tokio::test]
    async fn delete_menu_item_then_menu() {
        let svc = test_service().await;
        let menu = seed_menu(&svc).await;
        let item = seed_menu_item(&svc, menu.id().unwrap()).await;

        svc.delete_menu_item(&item).await.unwrap();
        let err = svc.get_menu_item(item.id().unwrap()).await.unwrap_err();
        assert_eq!(err.to_string(), "MenuItem not found");

        svc.delete_menu(&menu).await.unwrap();
    }
}
