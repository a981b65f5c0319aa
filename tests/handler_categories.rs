mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_category() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    let response = server
        .post("/categorys")
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Tools", "description": "Hand tools"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<serde_json::Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .get(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Tools");
    assert_eq!(body["description"], "Hand tools");
}

#[tokio::test]
async fn test_get_missing_category() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    let response = server
        .get("/categorys/42")
        .add_header("Authorization", token.as_str())
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}

#[tokio::test]
async fn test_create_category_empty_name() {
    let (server, stores) = common::make_server();
    let token = common::login(&server, "alice").await;

    let response = server
        .post("/categorys")
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "", "description": "Hand tools"}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(stores.categories.reads(), 0);
}

#[tokio::test]
async fn test_create_category_unknown_field() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    let response = server
        .post("/categorys")
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Tools", "description": "Hand tools", "color": "red"}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_category_partial() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;
    let (category_id, _) = common::seed_parents(&server, &token).await;

    let response = server
        .put(&format!("/categorys/{}", category_id))
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Tools2"}))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Tools2");
    assert_eq!(body["description"], "Hand tools");
}

#[tokio::test]
async fn test_update_missing_category() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    let response = server
        .put("/categorys/999")
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Ghost"}))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_category() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;
    let (category_id, _) = common::seed_parents(&server, &token).await;

    server
        .delete(&format!("/categorys/{}", category_id))
        .add_header("Authorization", token.as_str())
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Second delete finds nothing
    server
        .delete(&format!("/categorys/{}", category_id))
        .add_header("Authorization", token.as_str())
        .await
        .assert_status_not_found();

    server
        .get(&format!("/categorys/{}", category_id))
        .add_header("Authorization", token.as_str())
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_list_categories_in_id_order() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    for name in ["Tools", "Paint", "Garden"] {
        server
            .post("/categorys")
            .add_header("Authorization", token.as_str())
            .json(&json!({"name": name, "description": "-"}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await;

    response.assert_status_ok();
    let body = response.json::<Vec<serde_json::Value>>();
    let names: Vec<&str> = body.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Tools", "Paint", "Garden"]);
}

#[tokio::test]
async fn test_list_categories_empty() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;

    let response = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await;

    response.assert_status_ok();
    assert!(response.json::<Vec<serde_json::Value>>().is_empty());
}
