mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_supplier_crud() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    let response = server
        .post("/suppliers")
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Acme", "description": "Wholesale", "phone": "555-0100"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/suppliers/{}", id))
        .add_header("Authorization", token.as_str())
        .json(&json!({"phone": "555-0199"}))
        .await;
    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["phone"], "555-0199");
    assert_eq!(body["name"], "Acme");

    server
        .delete(&format!("/suppliers/{}", id))
        .add_header("Authorization", token.as_str())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get("/suppliers")
        .add_header("Authorization", token.as_str())
        .await;
    response.assert_status_ok();
    assert!(response.json::<Vec<serde_json::Value>>().is_empty());
}

#[tokio::test]
async fn test_create_supplier_missing_phone() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    let response = server
        .post("/suppliers")
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Acme", "description": "Wholesale"}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_missing_supplier() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    server
        .delete("/suppliers/7")
        .add_header("Authorization", token.as_str())
        .await
        .assert_status_not_found();
}
