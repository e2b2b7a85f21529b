//! HTTP handlers for the todo routes.
//!
//! Each handler runs the same steps: extract the body, check the required
//! fields, call the service, and map the outcome to a response. Nothing is
//! kept between requests.

use axum::{Json, extract::State, http::StatusCode};

use super::dto::{
    CreateTodoRequest, DeleteTodoRequest, TodoListResponse, TodoResponse, UpdateTodoRequest,
};
use super::error::{ApiError, Operation};
use super::extract::JsonBody;
use crate::application::TodoService;
use crate::domain::{TodoId, TodoText};

// =============================================================================
// Application State
// =============================================================================

/// Shared application dependencies.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: TodoService,
    /// Status for a create request without text.
    pub create_validation_status: StatusCode,
}

impl AppState {
    /// Creates state that answers create validation failures with 400.
    #[must_use]
    pub const fn new(service: TodoService) -> Self {
        Self {
            service,
            create_validation_status: StatusCode::BAD_REQUEST,
        }
    }

    /// Answers create validation failures with 404, as older clients expect.
    #[must_use]
    pub const fn with_legacy_create_status(mut self, enabled: bool) -> Self {
        self.create_validation_status = if enabled {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        };
        self
    }
}

fn required_text(text: Option<String>) -> Option<TodoText> {
    text.and_then(|text| TodoText::parse(text).ok())
}

// =============================================================================
// POST /api/todo
// =============================================================================

/// Creates a todo.
///
/// # Errors
///
/// - 400 `{"message": "Failed to create Todo"}` when `text` is missing or
///   empty (404 in legacy mode)
/// - 500 `{"error": "Server Failed to create todo"}` when the store fails
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let text = required_text(request.text).ok_or_else(|| {
        ApiError::validation(state.create_validation_status, "Failed to create Todo")
    })?;

    let todo = state
        .service
        .create(text)
        .await
        .map_err(ApiError::store(Operation::Create))?;

    Ok(Json(TodoResponse::new("Created Todo", todo)))
}

// =============================================================================
// GET /api/todo
// =============================================================================

/// Lists all todos, most recent first.
///
/// # Errors
///
/// 500 `{"message": "Failed to get todos"}` when the store fails.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<TodoListResponse>, ApiError> {
    let todos = state
        .service
        .list_all()
        .await
        .map_err(ApiError::store(Operation::List))?;

    Ok(Json(TodoListResponse {
        message: "Fetched all todos".to_string(),
        todos,
    }))
}

// =============================================================================
// DELETE /api/todo
// =============================================================================

/// Deletes a todo by id and returns its last state.
///
/// # Errors
///
/// - 400 `{"message": "No id provided"}` when `id` is missing or zero
/// - 500 `{"message": "Failed to delete todo"}` when the store fails,
///   including when the id does not exist
pub async fn delete_todo(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<DeleteTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = TodoId::from_request(request.id).ok_or(ApiError::bad_request("No id provided"))?;

    let todo = state
        .service
        .delete(id)
        .await
        .map_err(ApiError::store(Operation::Delete))?;

    Ok(Json(TodoResponse::new("Todo deleted", todo)))
}

// =============================================================================
// PATCH /api/todo
// =============================================================================

/// Replaces the text of a todo.
///
/// `id` is checked before `text`.
///
/// # Errors
///
/// - 400 `{"message": "No id provided"}` when `id` is missing or zero
/// - 400 `{"message": "No text provided"}` when `text` is missing or empty
/// - 500 `{"message": "Failed to update todo"}` when the store fails,
///   including when the id does not exist
pub async fn update_todo(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = TodoId::from_request(request.id).ok_or(ApiError::bad_request("No id provided"))?;
    let text = required_text(request.text).ok_or(ApiError::bad_request("No text provided"))?;

    let todo = state
        .service
        .update(id, text)
        .await
        .map_err(ApiError::store(Operation::Update))?;

    Ok(Json(TodoResponse::new("Todo updated", todo)))
}

// =============================================================================
// GET /health
// =============================================================================

/// Health check response body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe; does not touch the store.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// =============================================================================
// Tests
// =============================================================================
