//! End-to-end cache-aside behaviour through the HTTP surface.

mod common;

use axum_test::TestServer;
use inventory_api::domain::entities::CategoryPatch;
use inventory_api::infrastructure::cache::CacheService;
use inventory_api::routes::api_router;
use serde_json::json;

async fn create_tools(server: &TestServer, token: &str) -> i64 {
    server
        .post("/categorys")
        .add_header("Authorization", token)
        .json(&json!({"name": "Tools", "description": "Hand tools"}))
        .await
        .json::<serde_json::Value>()["id"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
async fn test_second_list_is_served_from_cache() {
    let (server, stores) = common::make_server();
    let token = common::login(&server, "alice").await;
    create_tools(&server, &token).await;

    let first = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .json::<serde_json::Value>();
    let second = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .json::<serde_json::Value>();

    assert_eq!(first, second);
    assert_eq!(stores.categories.reads(), 1);
    assert!(stores.cache.get("all_categories").await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_drops_collection_key() {
    let (server, stores) = common::make_server();
    let token = common::login(&server, "alice").await;
    create_tools(&server, &token).await;

    server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .assert_status_ok();

    server
        .post("/categorys")
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Paint", "description": "Brushes"}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    assert!(stores.cache.get("all_categories").await.unwrap().is_none());

    let list = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .json::<Vec<serde_json::Value>>();

    assert_eq!(list.len(), 2);
    assert_eq!(stores.categories.reads(), 2);
}

#[tokio::test]
async fn test_get_one_after_create_returns_record() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;
    let id = create_tools(&server, &token).await;

    let response = server
        .get(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "Tools");
}

#[tokio::test]
async fn test_rename_visible_on_cold_cache() {
    let (server, stores) = common::make_server();
    let token = common::login(&server, "alice").await;
    let id = create_tools(&server, &token).await;

    let list = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .json::<Vec<serde_json::Value>>();
    assert_eq!(list[0]["name"], "Tools");

    server
        .put(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Tools2"}))
        .await
        .assert_status_ok();

    assert!(
        stores
            .cache
            .get(&format!("category_{}", id))
            .await
            .unwrap()
            .is_none()
    );

    let one = server
        .get(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .await
        .json::<serde_json::Value>();
    assert_eq!(one["name"], "Tools2");

    let list = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .json::<Vec<serde_json::Value>>();
    assert_eq!(list[0]["name"], "Tools2");
}

#[tokio::test]
async fn test_collection_only_policy_leaves_item_key_stale() {
    let (server, _) = common::make_server();
    let token = common::login(&server, "alice").await;
    let id = create_tools(&server, &token).await;

    // Warm the item key
    server
        .get(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .await
        .assert_status_ok();

    server
        .put(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Tools2"}))
        .await
        .assert_status_ok();

    let one = server
        .get(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .await
        .json::<serde_json::Value>();
    assert_eq!(one["name"], "Tools");

    let list = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .json::<Vec<serde_json::Value>>();
    assert_eq!(list[0]["name"], "Tools2");
}

#[tokio::test]
async fn test_collection_and_item_policy_refreshes_item_key() {
    let mut settings = common::settings();
    settings.invalidate_item_keys = true;
    let (state, _) = common::create_test_state_with(settings, true);
    let server = TestServer::new(api_router(state)).unwrap();
    let token = common::login(&server, "alice").await;
    let id = create_tools(&server, &token).await;

    server
        .get(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .await
        .assert_status_ok();

    server
        .put(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .json(&json!({"name": "Tools2"}))
        .await
        .assert_status_ok();

    let one = server
        .get(&format!("/categorys/{}", id))
        .add_header("Authorization", token.as_str())
        .await
        .json::<serde_json::Value>();
    assert_eq!(one["name"], "Tools2");
}

#[tokio::test]
async fn test_out_of_band_store_edit_hidden_until_invalidation() {
    let (server, stores) = common::make_server();
    let token = common::login(&server, "alice").await;
    let id = create_tools(&server, &token).await;

    server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .assert_status_ok();

    stores.categories.overwrite(
        id,
        CategoryPatch {
            description: Some("Edited directly".to_string()),
            ..Default::default()
        },
    );

    let list = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .json::<Vec<serde_json::Value>>();
    assert_eq!(list[0]["description"], "Hand tools");

    stores.cache.delete("all_categories").await.unwrap();

    let list = server
        .get("/categorys")
        .add_header("Authorization", token.as_str())
        .await
        .json::<Vec<serde_json::Value>>();
    assert_eq!(list[0]["description"], "Edited directly");
}

#[tokio::test]
async fn test_missing_item_is_not_cached() {
    let (server, stores) = common::make_server();
    let token = common::login(&server, "alice").await;

    for _ in 0..2 {
        server
            .get("/categorys/5")
            .add_header("Authorization", token.as_str())
            .await
            .assert_status_not_found();
    }

    assert_eq!(stores.categories.reads(), 2);
    assert!(stores.cache.get("category_5").await.unwrap().is_none());
}
