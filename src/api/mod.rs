//! API module for HTTP handlers.
//!
//! This module contains route definitions, request/response bodies and the
//! page served to browsers.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod page;
pub mod routes;

pub use dto::{
    CreateTodoRequest, DeleteTodoRequest, ErrorResponse, MessageResponse, TodoListResponse,
    TodoResponse, UpdateTodoRequest,
};
pub use error::{ApiError, Operation};
pub use extract::JsonBody;
pub use handlers::{
    AppState, HealthResponse, create_todo, delete_todo, health_check, list_todos, update_todo,
};
pub use routes::{TODO_PATH, create_router};
