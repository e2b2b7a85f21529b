//! Request and response bodies for the todo routes.
//!
//! Request fields are optional so that a missing field is reported as a
//! validation failure with the route's own message instead of a parse error.

use serde::{Deserialize, Serialize};

use crate::domain::Todo;

// =============================================================================
// Requests
// =============================================================================

/// `POST /api/todo` body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// `PATCH /api/todo` body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub text: Option<String>,
}

/// `DELETE /api/todo` body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeleteTodoRequest {
    #[serde(default)]
    pub id: Option<i64>,
}

// =============================================================================
// Responses
// =============================================================================

/// Single-todo success body: `{"message": ..., "todo": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TodoResponse {
    pub message: String,
    pub todo: Todo,
}

impl TodoResponse {
    #[must_use]
    pub fn new(message: impl Into<String>, todo: Todo) -> Self {
        Self {
            message: message.into(),
            todo,
        }
    }
}

/// List success body: `{"message": ..., "todos": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TodoListResponse {
    pub message: String,
    pub todos: Vec<Todo>,
}

/// Failure body keyed by `message`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body keyed by `error`, used by the create route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
