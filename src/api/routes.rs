//! Routing definitions for the todo API.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_todo, delete_todo, health_check, list_todos, update_todo,
};
use super::page::index;

/// Path shared by all four todo operations.
pub const TODO_PATH: &str = "/api/todo";

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the application router with all routes and middleware.
///
/// # Examples
///
/// ```ignore
/// let router = create_router(state);
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route(
            TODO_PATH,
            get(list_todos)
                .post(create_todo)
                .patch(update_todo)
                .delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Tests
// =============================================================================
