//! Shared test utilities for bistro-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use bistro_core::entities::{Employee, Menu, MenuItem, Timesheet};
    use serde_json::{Value, json};

    use crate::BistroDb;
    use crate::service::BistroService;

    /// Create an in-memory BistroService with an empty schema.
    pub async fn test_service() -> BistroService {
        let db = BistroDb::open_local(":memory:").await.unwrap();
        BistroService::from_db(db)
    }

    /// A valid employee payload with no id.
    pub fn employee_payload() -> Value {
        json!({ "name": "Employee 1", "position": "Manager", "wage": 10 })
    }

    /// Insert a current employee built from `employee_payload`.
    pub async fn seed_employee(svc: &BistroService) -> Employee {
        let draft = Employee::hydrate(&employee_payload()).unwrap();
        svc.create_employee(&draft).await.unwrap()
    }

    /// Insert a timesheet for `employee_id`.
    pub async fn seed_timesheet(svc: &BistroService, employee_id: i64) -> Timesheet {
        let draft = Timesheet::hydrate(&json!({
            "hours": 10,
            "rate": 15.5,
            "date": 1_506_100_907_820_i64,
            "employeeId": employee_id
        }))
        .unwrap();
        svc.create_timesheet(&draft).await.unwrap()
    }

    /// Insert a menu titled "Lunch".
    pub async fn seed_menu(svc: &BistroService) -> Menu {
        let draft = Menu::hydrate(&json!({ "title": "Lunch" })).unwrap();
        svc.create_menu(&draft).await.unwrap()
    }

    /// Insert a described menu item on `menu_id`.
    pub async fn seed_menu_item(svc: &BistroService, menu_id: i64) -> MenuItem {
        let draft = MenuItem::hydrate(&json!({
            "name": "Pancakes",
            "description": "Short stack",
            "inventory": 10,
            "price": 2.5,
            "menuId": menu_id
        }))
        .unwrap();
        svc.create_menu_item(&draft).await.unwrap()
    }
}
