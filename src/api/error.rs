//! API error handling.
//!
//! Every failure a route can produce is an [`ApiError`]. Validation failures
//! carry their own status and fixed message. Store failures are logged and
//! answered with a generic per-operation message; the underlying error never
//! reaches the response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::dto::{ErrorResponse, MessageResponse};
use crate::infrastructure::RepositoryError;

/// Which route failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Update,
    Delete,
}

impl Operation {
    /// Fixed message returned when the store fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Server Failed to create todo",
            Self::List => "Failed to get todos",
            Self::Update => "Failed to update todo",
            Self::Delete => "Failed to delete todo",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        formatter.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or empty.
    #[error("{message}")]
    Validation {
        status: StatusCode,
        message: &'static str,
    },

    /// The body is not valid JSON for the route.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// The store rejected the operation.
    #[error("{operation} failed: {source}")]
    Store {
        operation: Operation,
        #[source]
        source: RepositoryError,
    },
}

impl ApiError {
    #[must_use]
    pub const fn validation(status: StatusCode, message: &'static str) -> Self {
        Self::Validation { status, message }
    }

    #[must_use]
    pub const fn bad_request(message: &'static str) -> Self {
        Self::validation(StatusCode::BAD_REQUEST, message)
    }

    /// Returns a closure that wraps a store error for `operation`, for use
    /// with `map_err`.
    pub fn store(operation: Operation) -> impl Fn(RepositoryError) -> Self {
        move |source| Self::Store { operation, source }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Validation { message, .. } => (
                status,
                Json(MessageResponse {
                    message: message.to_string(),
                }),
            )
                .into_response(),
            Self::MalformedBody(detail) => {
                tracing::debug!(%detail, "Rejected malformed request body");
                (
                    status,
                    Json(MessageResponse {
                        message: "Invalid request body".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Store { operation, source } => {
                tracing::debug!(%operation, error = %source, "Answering store failure with generic message");
                let message = operation.failure_message().to_string();
                match operation {
                    Operation::Create => {
                        (status, Json(ErrorResponse { error: message })).into_response()
                    }
                    Operation::List | Operation::Update | Operation::Delete => {
                        (status, Json(MessageResponse { message })).into_response()
                    }
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
