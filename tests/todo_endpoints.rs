//! Integration tests for the `/api/todo` routes.
//!
//! Requests go through the full router (extractors, middleware, error
//! mapping) against an in-memory store.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

use common::{
    create_app_state_with_repository, create_test_app_state, create_test_router, list, send_json,
    send_raw,
};
use todo_app::api::create_router;
use todo_app::domain::{Todo, TodoId, TodoText};
use todo_app::infrastructure::{RepositoryError, RepositoryFuture, TodoRepository};

/// Store whose every call fails with a database error.
struct BrokenRepository;

impl TodoRepository for BrokenRepository {
    fn create(&self, _text: TodoText) -> RepositoryFuture<Todo> {
        Box::pin(async { Err(RepositoryError::Database("disk full".to_string())) })
    }

    fn list_all(&self) -> RepositoryFuture<Vec<Todo>> {
        Box::pin(async { Err(RepositoryError::Database("disk full".to_string())) })
    }

    fn update(&self, _id: TodoId, _text: TodoText) -> RepositoryFuture<Todo> {
        Box::pin(async { Err(RepositoryError::Database("disk full".to_string())) })
    }

    fn delete(&self, _id: TodoId) -> RepositoryFuture<Todo> {
        Box::pin(async { Err(RepositoryError::Database("disk full".to_string())) })
    }
}

async fn create(router: &axum::Router, text: &str) -> Value {
    let (status, body) = send_json(router, Method::POST, &json!({ "text": text })).await;
    assert_eq!(status, StatusCode::OK);
    body["todo"].clone()
}

fn listed_texts(body: &Value) -> Vec<&str> {
    body["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["text"].as_str().unwrap())
        .collect()
}

// =============================================================================
// POST /api/todo
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_create_returns_message_and_todo() {
    let router = create_test_router();

    let (status, body) = send_json(&router, Method::POST, &json!({ "text": "buy milk" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Created Todo");
    assert_eq!(body["todo"]["text"], "buy milk");
    assert!(body["todo"]["id"].as_i64().unwrap() > 0);
    assert!(body["todo"]["createdAt"].is_string());
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "text": null }))]
#[case(json!({ "text": "" }))]
#[tokio::test]
async fn test_create_without_text_is_rejected(#[case] request: Value) {
    let router = create_test_router();

    let (status, body) = send_json(&router, Method::POST, &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Failed to create Todo" }));

    let (_, listed) = list(&router).await;
    assert!(listed["todos"].as_array().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_create_without_text_in_legacy_mode_is_not_found() {
    let router = create_router(create_test_app_state().with_legacy_create_status(true));

    let (status, body) = send_json(&router, Method::POST, &json!({ "text": "" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Failed to create Todo");
}

#[rstest]
#[tokio::test]
async fn test_whitespace_text_is_accepted() {
    let router = create_test_router();

    let todo = create(&router, "   ").await;

    assert_eq!(todo["text"], "   ");
}

// =============================================================================
// GET /api/todo
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_list_is_most_recent_first() {
    let router = create_test_router();
    for text in ["A", "B", "C"] {
        create(&router, text).await;
    }

    let (status, body) = list(&router).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fetched all todos");
    assert_eq!(listed_texts(&body), vec!["C", "B", "A"]);
}

// =============================================================================
// DELETE /api/todo
// =============================================================================

#[rstest]
#[case(json!({}))]
#[case(json!({ "id": 0 }))]
#[case(json!({ "id": null }))]
#[tokio::test]
async fn test_delete_without_id_is_rejected(#[case] request: Value) {
    let router = create_test_router();

    let (status, body) = send_json(&router, Method::DELETE, &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "No id provided" }));
}

#[rstest]
#[tokio::test]
async fn test_delete_twice_fails_the_second_time() {
    let router = create_test_router();
    let todo = create(&router, "once").await;

    let (status, body) = send_json(&router, Method::DELETE, &json!({ "id": todo["id"] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo deleted");
    assert_eq!(body["todo"], todo);

    let (status, body) = send_json(&router, Method::DELETE, &json!({ "id": todo["id"] })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to delete todo" }));
}

// =============================================================================
// PATCH /api/todo
// =============================================================================

#[rstest]
#[case(json!({}), "No id provided")]
#[case(json!({ "text": "x" }), "No id provided")]
#[case(json!({ "id": 0, "text": "x" }), "No id provided")]
#[case(json!({ "id": 1 }), "No text provided")]
#[case(json!({ "id": 1, "text": "" }), "No text provided")]
#[tokio::test]
async fn test_update_validation(#[case] request: Value, #[case] message: &str) {
    let router = create_test_router();
    let todo = create(&router, "unchanged").await;

    let (status, body) = send_json(&router, Method::PATCH, &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], message);

    let (_, listed) = list(&router).await;
    assert_eq!(listed["todos"], json!([todo]));
}

#[rstest]
#[tokio::test]
async fn test_update_changes_only_text() {
    let router = create_test_router();
    let todo = create(&router, "buy milk").await;

    let (status, body) = send_json(
        &router,
        Method::PATCH,
        &json!({ "id": todo["id"], "text": "buy oat milk" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Todo updated");
    assert_eq!(body["todo"]["id"], todo["id"]);
    assert_eq!(body["todo"]["createdAt"], todo["createdAt"]);
    assert_eq!(body["todo"]["text"], "buy oat milk");
}

#[rstest]
#[tokio::test]
async fn test_update_unknown_id_is_a_server_failure() {
    let router = create_test_router();

    let (status, body) =
        send_json(&router, Method::PATCH, &json!({ "id": 999, "text": "x" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Failed to update todo" }));
}

// =============================================================================
// Request Bodies
// =============================================================================

#[rstest]
#[case(Method::POST)]
#[case(Method::PATCH)]
#[case(Method::DELETE)]
#[tokio::test]
async fn test_malformed_body_is_bad_request(#[case] method: Method) {
    let router = create_test_router();

    let (status, body) = send_raw(&router, method, "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid request body" }));
}

// =============================================================================
// Store Failures
// =============================================================================

#[rstest]
#[case(Method::POST, json!({ "text": "x" }), json!({ "error": "Server Failed to create todo" }))]
#[case(Method::GET, Value::Null, json!({ "message": "Failed to get todos" }))]
#[case(Method::PATCH, json!({ "id": 1, "text": "x" }), json!({ "message": "Failed to update todo" }))]
#[case(Method::DELETE, json!({ "id": 1 }), json!({ "message": "Failed to delete todo" }))]
#[tokio::test]
async fn test_store_failures_use_generic_bodies(
    #[case] method: Method,
    #[case] request: Value,
    #[case] expected: Value,
) {
    let router = create_router(create_app_state_with_repository(Arc::new(BrokenRepository)));

    let (status, body) = send_json(&router, method, &request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);
}

// =============================================================================
// Full Scenario
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_create_list_update_delete_scenario() {
    let router = create_test_router();

    let todo = create(&router, "buy milk").await;

    let (_, listed) = list(&router).await;
    assert_eq!(listed["todos"][0], todo);

    let (status, _) = send_json(
        &router,
        Method::PATCH,
        &json!({ "id": todo["id"], "text": "buy oat milk" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = list(&router).await;
    assert_eq!(listed_texts(&listed), vec!["buy oat milk"]);

    let (status, _) = send_json(&router, Method::DELETE, &json!({ "id": todo["id"] })).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = list(&router).await;
    assert!(listed["todos"].as_array().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_health_check() {
    let router = create_test_router();
    let response = tower::ServiceExt::oneshot(
        router,
        axum::http::Request::builder()
            .uri("/health")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
