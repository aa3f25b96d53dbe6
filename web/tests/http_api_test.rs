//! End-to-end HTTP tests over the full router.
//!
//! Each test drives the real router (layers included) with an in-memory
//! store, so it checks status codes, fragment contents and storage effects
//! together.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::http::StatusCode;
use axum_test::TestServer;
use hx_todo_core::{TodoId, TodoStore};
use hx_todo_testing::{FailingTodoStore, InMemoryTodoStore, helpers::seed};
use hx_todo_web::{AppState, CORRELATION_ID_HEADER, build_router};

fn server_with(store: InMemoryTodoStore) -> TestServer {
    TestServer::new(build_router(AppState::new(store))).expect("Failed to create test server")
}

fn failing_server() -> TestServer {
    TestServer::new(build_router(AppState::new(FailingTodoStore::new())))
        .expect("Failed to create test server")
}

fn content_type(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .unwrap()
        .to_string()
}

// ============================================================================
// Page shell
// ============================================================================

#[tokio::test]
async fn test_shell_is_a_full_document_with_loading_region() {
    let server = server_with(InMemoryTodoStore::new());

    let response = server.get("/").await;

    response.assert_status_ok();
    assert_eq!(content_type(&response), "text/html; charset=utf-8");
    let html = response.text();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("htmx.org@1.9.10"));
    assert!(html.contains(r#"<div id="todos" hx-get="/todos" hx-trigger="load" hx-swap="innerHTML"></div>"#));
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_empty_list_renders_only_the_form() {
    let server = server_with(InMemoryTodoStore::new());

    let response = server.get("/todos").await;

    response.assert_status_ok();
    assert_eq!(content_type(&response), "text/html; charset=utf-8");
    let html = response.text();
    assert!(html.starts_with("<form"));
    assert!(!html.contains("todo-item"));
}

#[tokio::test]
async fn test_list_renders_rows_in_creation_order() {
    let store = InMemoryTodoStore::new();
    seed(&store, &["First", "Second", "Third"]).await;
    let server = server_with(store);

    let html = server.get("/todos").await.text();

    let first = html.find("<p>First</p>").unwrap();
    let second = html.find("<p>Second</p>").unwrap();
    let third = html.find("<p>Third</p>").unwrap();
    let form = html.find("<form").unwrap();
    assert!(first < second && second < third && third < form);
}

#[tokio::test]
async fn test_list_storage_failure_is_500() {
    let response = failing_server().get("/todos").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    assert!(!body["message"].as_str().unwrap().contains("store unavailable"));
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_returns_new_row() {
    let store = InMemoryTodoStore::new();
    let server = server_with(store.clone());

    let response = server
        .post("/todos")
        .form(&[("content", "Buy milk")])
        .await;

    response.assert_status_ok();
    assert_eq!(content_type(&response), "text/html; charset=utf-8");
    let html = response.text();
    assert!(html.starts_with(r#"<div id="todo-1" class="todo-item">"#));
    assert!(html.contains("<p>Buy milk</p>"));
    assert!(!html.contains("<form"));

    let todos = store.list_all().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].content, "Buy milk");
    assert!(!todos[0].completed);
}

#[tokio::test]
async fn test_create_escapes_markup() {
    let server = server_with(InMemoryTodoStore::new());

    let html = server
        .post("/todos")
        .form(&[("content", "<b>bold</b> & more")])
        .await
        .text();

    assert!(html.contains("<p>&lt;b&gt;bold&lt;/b&gt; &amp; more</p>"));
}

#[tokio::test]
async fn test_create_with_empty_content_is_rejected_without_write() {
    let store = InMemoryTodoStore::new();
    let server = server_with(store.clone());

    let response = server.post("/todos").form(&[("content", "")]).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_keeps_submitted_whitespace() {
    let store = InMemoryTodoStore::new();
    let server = server_with(store.clone());

    server.post("/todos").form(&[("content", "   ")]).await.assert_status_ok();
    let html = server.post("/todos").form(&[("content", "  A  ")]).await.text();

    assert!(html.contains("<p>  A  </p>"));
    let contents: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.content)
        .collect();
    assert_eq!(contents, ["   ", "  A  "]);
}

#[tokio::test]
async fn test_create_with_missing_field_counts_as_empty() {
    let store = InMemoryTodoStore::new();
    let server = server_with(store.clone());

    let response = server.post("/todos").form(&[("other", "x")]).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_assigns_distinct_ids_in_order() {
    let store = InMemoryTodoStore::new();
    let server = server_with(store.clone());

    server.post("/todos").form(&[("content", "A")]).await.assert_status_ok();
    server.post("/todos").form(&[("content", "B")]).await.assert_status_ok();

    let todos = store.list_all().await.unwrap();
    let contents: Vec<_> = todos.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, ["A", "B"]);
    assert_ne!(todos[0].id, todos[1].id);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let store = InMemoryTodoStore::new();
    let server = server_with(store.clone());

    server.post("/todos").form(&[("content", "A")]).await.assert_status_ok();
    server.delete("/todos/1").await.assert_status_ok();
    let html = server.post("/todos").form(&[("content", "B")]).await.text();

    assert!(!html.contains(r#"id="todo-1""#));
    let todos = store.list_all().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_ne!(todos[0].id, TodoId::new(1));
}

// ============================================================================
// Toggle
// ============================================================================

#[tokio::test]
async fn test_toggle_returns_updated_row() {
    let store = InMemoryTodoStore::new();
    let todos = seed(&store, &["Buy milk"]).await;
    let server = server_with(store.clone());

    let response = server.post(&format!("/todos/toggle/{}", todos[0].id)).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"class="todo-item completed""#));
    assert!(html.contains(" checked />"));
    assert!(store.get_by_id(todos[0].id).await.unwrap().unwrap().completed);
}

#[tokio::test]
async fn test_toggle_twice_restores_state() {
    let store = InMemoryTodoStore::new();
    let todos = seed(&store, &["A"]).await;
    let server = server_with(store.clone());
    let path = format!("/todos/toggle/{}", todos[0].id);

    server.post(&path).await.assert_status_ok();
    let html = server.post(&path).await.text();

    assert!(!html.contains("checked"));
    assert!(!store.get_by_id(todos[0].id).await.unwrap().unwrap().completed);
}

#[tokio::test]
async fn test_toggle_missing_id_is_404_and_changes_nothing() {
    let store = InMemoryTodoStore::new();
    seed(&store, &["A", "B"]).await;
    let before = store.list_all().await.unwrap();
    let server = server_with(store.clone());

    let response = server.post("/todos/toggle/999").await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(store.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_toggle_malformed_id_is_400() {
    let store = InMemoryTodoStore::new();
    seed(&store, &["A"]).await;
    let server = server_with(store.clone());

    for path in ["/todos/toggle/abc", "/todos/toggle/0", "/todos/toggle/-1"] {
        let response = server.post(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    assert!(!store.list_all().await.unwrap()[0].completed);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_returns_empty_200() {
    let store = InMemoryTodoStore::new();
    let todos = seed(&store, &["A", "B"]).await;
    let server = server_with(store.clone());

    let response = server.delete(&format!("/todos/{}", todos[0].id)).await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
    assert!(store.get_by_id(todos[0].id).await.unwrap().is_none());
    assert_eq!(store.list_all().await.unwrap(), vec![todos[1].clone()]);
}

#[tokio::test]
async fn test_delete_missing_id_is_200_and_changes_nothing() {
    let store = InMemoryTodoStore::new();
    let todos = seed(&store, &["A"]).await;
    let server = server_with(store.clone());

    let response = server.delete("/todos/42").await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
    assert_eq!(store.list_all().await.unwrap(), todos);
}

#[tokio::test]
async fn test_delete_malformed_id_is_400() {
    let server = server_with(InMemoryTodoStore::new());
    server
        .delete("/todos/not-a-number")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

// ============================================================================
// Full scenario
// ============================================================================

#[tokio::test]
async fn test_create_toggle_delete_scenario() {
    let store = InMemoryTodoStore::new();
    let server = server_with(store.clone());

    server
        .post("/todos")
        .form(&[("content", "Buy milk")])
        .await
        .assert_status_ok();
    let list = server.get("/todos").await.text();
    assert!(list.contains(r#"<div id="todo-1" class="todo-item">"#));
    assert!(list.contains("<p>Buy milk</p>"));

    let toggled = server.post("/todos/toggle/1").await.text();
    assert!(toggled.contains(r#"<div id="todo-1" class="todo-item completed">"#));

    server.delete("/todos/1").await.assert_status_ok();
    let list = server.get("/todos").await.text();
    assert!(!list.contains("todo-item"));
    assert!(store.is_empty().await);
}

// ============================================================================
// Health and middleware
// ============================================================================

#[tokio::test]
async fn test_health_reports_version() {
    let response = server_with(InMemoryTodoStore::new()).get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_ready_tracks_store_health() {
    let response = server_with(InMemoryTodoStore::new()).get("/ready").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], true);
    assert_eq!(body["database"], true);

    let response = failing_server().get("/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["ready"], false);
}

#[tokio::test]
async fn test_every_response_carries_a_correlation_id() {
    let server = server_with(InMemoryTodoStore::new());

    for response in [
        server.get("/").await,
        server.get("/todos").await,
        server.post("/todos/toggle/7").await,
    ] {
        assert!(response.headers().contains_key(CORRELATION_ID_HEADER));
    }
}
