mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_client, create_electrician, create_intervention, send_json, setup_app};

#[tokio::test]
async fn test_create_then_list_includes_electrician() {
    let app = setup_app();
    let id = create_electrician(&app, "Sophie Bernard").await;

    let (status, list) = send_json(&app, "GET", "/electricians", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Sophie Bernard");
    assert_eq!(list[0]["id"].as_i64().unwrap() as i32, id);
}

#[tokio::test]
async fn test_create_electrician_requires_name() {
    let app = setup_app();
    let (status, _) = send_json(&app, "POST", "/electricians", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_electrician_name() {
    let app = setup_app();
    let id = create_electrician(&app, "Jean Martin").await;
    let (status, updated) = send_json(
        &app,
        "PUT",
        "/electricians",
        Some(json!({ "id": id, "name": "Jean-Pierre Martin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Jean-Pierre Martin");
}

#[tokio::test]
async fn test_delete_referenced_electrician_is_refused() {
    let app = setup_app();
    let client_id = create_client(&app, "Entreprise Dupont").await;
    let electrician_id = create_electrician(&app, "Jean Martin").await;
    create_intervention(&app, "Installation prise extérieure", client_id, electrician_id).await;

    let (status, _) = send_json(
        &app,
        "DELETE",
        "/electricians",
        Some(json!({ "id": electrician_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, list) = send_json(&app, "GET", "/electricians", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_electrician_returns_confirmation() {
    let app = setup_app();
    let id = create_electrician(&app, "Sophie Bernard").await;
    let (status, body) = send_json(
        &app,
        "DELETE",
        "/electricians",
        Some(json!({ "id": id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Électricien supprimé");
}
