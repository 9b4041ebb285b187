//! End-to-end record behavior through the public service API.

use bistro_core::entities::{Employee, Menu, MenuItem, Timesheet};
use bistro_core::errors::ExistenceError;
use bistro_db::error::DatabaseError;
use bistro_db::service::BistroService;
use pretty_assertions::assert_eq;
use serde_json::json;

async fn seeded() -> BistroService {
    let svc = BistroService::new_local(":memory:").await.unwrap();
    assert!(svc.seed_defaults().await.unwrap());
    svc
}

#[tokio::test]
async fn seeded_employee_soft_delete() {
    let svc = seeded().await;

    let employee = svc.get_employee(1).await.unwrap();
    assert_eq!(
        serde_json::to_value(&employee).unwrap(),
        json!({
            "id": 1,
            "name": "Employee 1",
            "position": "Manager",
            "wage": 10,
            "is_current_employee": 1
        })
    );

    svc.delete_employee(&employee).await.unwrap();
    let after = svc.get_employee(1).await.unwrap();
    assert!(!after.is_current_employee());
    assert_eq!(
        serde_json::to_value(&after).unwrap()["is_current_employee"],
        json!(0)
    );
    assert!(svc.list_current_employees().await.unwrap().is_empty());
}

#[tokio::test]
async fn employee_update_keeps_identity_and_flag() {
    let svc = seeded().await;
    let employee = svc.get_employee(1).await.unwrap();

    let updated = svc
        .update_employee(
            &employee,
            &json!({ "name": "Ada", "position": "Chef", "wage": "20", "isCurrentEmployee": 0 }),
        )
        .await
        .unwrap();
    assert_eq!(updated.id(), Some(1));
    assert_eq!(updated.name(), "Ada");
    assert_eq!(updated.position(), "Chef");
    assert_eq!(updated.wage(), 20);
    assert!(updated.is_current_employee());
}

#[tokio::test]
async fn integer_strings_are_stored_as_numbers() {
    let svc = seeded().await;
    let employee = svc.get_employee(1).await.unwrap();

    let err = svc
        .update_employee(&employee, &json!({ "wage": "42.42" }))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "wage must be an integer");
    assert_eq!(err.status_code(), 400);

    let updated = svc
        .update_employee(&employee, &json!({ "wage": "42" }))
        .await
        .unwrap();
    assert_eq!(serde_json::to_value(&updated).unwrap()["wage"], json!(42));
}

#[tokio::test]
async fn employment_flag_values() {
    let svc = BistroService::new_local(":memory:").await.unwrap();

    let omitted = Employee::hydrate(&json!({ "name": "A", "position": "B", "wage": 1 })).unwrap();
    assert!(svc.create_employee(&omitted).await.unwrap().is_current_employee());

    let retired = Employee::hydrate(&json!({
        "name": "A",
        "position": "B",
        "wage": 1,
        "isCurrentEmployee": 0
    }))
    .unwrap();
    let stored = svc.create_employee(&retired).await.unwrap();
    assert!(!stored.is_current_employee());
    assert_eq!(svc.list_current_employees().await.unwrap().len(), 1);

    let err = Employee::hydrate(&json!({
        "name": "A",
        "position": "B",
        "wage": 1,
        "isCurrentEmployee": 2
    }))
    .unwrap_err();
    assert_eq!(err.to_string(), "isCurrentEmployee must be either 1 or 0");
}

#[tokio::test]
async fn timesheet_for_missing_employee_is_rejected() {
    let svc = seeded().await;
    let draft = Timesheet::hydrate(&json!({
        "hours": 1,
        "rate": 1,
        "date": 1,
        "employeeId": 2
    }))
    .unwrap();

    let err = svc.create_timesheet(&draft).await.unwrap_err();
    assert_eq!(err.to_string(), "Employee not found");
    assert_eq!(err.status_code(), 404);
    assert_eq!(svc.list_timesheets(1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn menu_delete_follows_its_items() {
    let svc = seeded().await;
    let menu = svc.get_menu(1).await.unwrap();

    let err = svc.delete_menu(&menu).await.unwrap_err();
    assert_eq!(err.to_string(), "menu has associated menu items");
    assert!(matches!(
        err,
        DatabaseError::Existence(ExistenceError::HasDependents { .. })
    ));
    assert_eq!(svc.get_menu(1).await.unwrap(), menu);

    for item in svc.list_menu_items(1).await.unwrap() {
        svc.delete_menu_item(&item).await.unwrap();
    }
    svc.delete_menu(&menu).await.unwrap();
    assert_eq!(svc.get_menu(1).await.unwrap_err().status_code(), 404);
}

#[tokio::test]
async fn payload_and_row_shapes_agree() {
    let svc = seeded().await;
    let menu = svc
        .create_menu(&Menu::hydrate(&json!({ "menuId": 77, "title": "Dinner" })).unwrap())
        .await
        .unwrap();
    assert_eq!(menu.id(), Some(2));

    let item = svc
        .create_menu_item(
            &MenuItem::hydrate(&json!({
                "name": "Soup",
                "inventory": 3,
                "price": 4.75,
                "menuId": 2
            }))
            .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({
            "id": 2,
            "name": "Soup",
            "inventory": 3,
            "price": 4.75,
            "menu_id": 2
        })
    );
}
