//! Menu repository. A menu cannot be deleted while menu items reference it.

use bistro_core::entities::Menu;
use bistro_core::enums::EntityKind;
use bistro_core::errors::ExistenceError;
use serde_json::Value;

use crate::error::DatabaseError;
use crate::guards::{MENU_HAS_ITEMS, translate_fk};
use crate::helpers::{hydrate_row, insert_returning_id, require_id};
use crate::service::BistroService;

const COLUMNS: &[&str] = &["id", "title"];
const SELECT_COLS: &str = "id, title";

fn row_to_menu(row: &libsql::Row) -> Result<Menu, DatabaseError> {
    hydrate_row(EntityKind::Menu, row, COLUMNS, Menu::hydrate)
}

impl BistroService {
    pub async fn create_menu(&self, menu: &Menu) -> Result<Menu, DatabaseError> {
        let id = insert_returning_id(
            self.db().conn(),
            "INSERT INTO Menu (title) VALUES (?1) RETURNING id",
            libsql::params![menu.title()],
        )
        .await?
        .ok_or(DatabaseError::NoResult)?;
        tracing::debug!(menu_id = id, "menu created");

        self.get_menu(id).await
    }

    pub async fn get_menu(&self, id: i64) -> Result<Menu, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM Menu WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(ExistenceError::not_found(EntityKind::Menu))?;
        row_to_menu(&row)
    }

    pub async fn list_menus(&self) -> Result<Vec<Menu>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM Menu ORDER BY id"), ())
            .await?;

        let mut menus = Vec::new();
        while let Some(row) = rows.next().await? {
            menus.push(row_to_menu(&row)?);
        }
        Ok(menus)
    }

    pub async fn update_menu(&self, menu: &Menu, partial: &Value) -> Result<Menu, DatabaseError> {
        let id = require_id(EntityKind::Menu, menu.id())?;
        let mut next = menu.clone();
        next.apply(partial)?;

        self.db()
            .conn()
            .execute(
                "UPDATE Menu SET title = ?1 WHERE id = ?2",
                libsql::params![next.title(), id],
            )
            .await?;
        tracing::debug!(menu_id = id, "menu updated");

        self.get_menu(id).await
    }

    /// Hard delete. Fails with `HasDependents` if menu items remain.
    pub async fn delete_menu(&self, menu: &Menu) -> Result<(), DatabaseError> {
        let id = require_id(EntityKind::Menu, menu.id())?;
        self.ensure_menu_has_no_items(id).await?;

        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM Menu WHERE id = ?1", libsql::params![id])
            .await
            .map_err(|e| translate_fk(e, MENU_HAS_ITEMS))?;
        if affected == 0 {
            return Err(ExistenceError::not_found(EntityKind::Menu).into());
        }
        tracing::debug!(menu_id = id, "menu deleted");
        Ok(())
    }
}
