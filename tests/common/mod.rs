//! Common test helpers for integration tests.
//!
//! # Note
//!
//! The `#![allow(dead_code)]` attribute is necessary because Rust compiles each
//! integration test file as a separate crate, and not every file uses every
//! helper.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use todo_app::api::{AppState, TODO_PATH, create_router};
use todo_app::application::TodoService;
use todo_app::infrastructure::{InMemoryTodoRepository, TodoRepository};

// =============================================================================
// AppState Creation Helpers
// =============================================================================

/// Creates a test `AppState` backed by an empty in-memory store.
pub fn create_test_app_state() -> AppState {
    create_app_state_with_repository(Arc::new(InMemoryTodoRepository::new()))
}

pub fn create_app_state_with_repository(repository: Arc<dyn TodoRepository>) -> AppState {
    AppState::new(TodoService::new(repository))
}

pub fn create_test_router() -> Router {
    create_router(create_test_app_state())
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Sends one request to `/api/todo` and returns the status and JSON body.
///
/// `body` is sent verbatim with no `Content-Type` header, as a browser `fetch`
/// without headers would.
pub async fn send_raw(router: &Router, method: Method, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(TODO_PATH)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn send_json(router: &Router, method: Method, body: &Value) -> (StatusCode, Value) {
    send_raw(router, method, &body.to_string()).await
}

pub async fn list(router: &Router) -> (StatusCode, Value) {
    send_raw(router, Method::GET, "").await
}

// =============================================================================
// Server Helpers
// =============================================================================

/// Serves `state` on an ephemeral local port and returns its base URL.
///
/// The server task runs until the test runtime shuts down.
pub async fn spawn_server(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    format!("http://{address}")
}
