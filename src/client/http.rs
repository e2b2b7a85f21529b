//! HTTP client for the todo routes.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use crate::api::TODO_PATH;
use crate::api::dto::{TodoListResponse, TodoResponse};
use crate::domain::{Todo, TodoId};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// An edit was submitted while no todo is selected.
    #[error("No todo selected")]
    NoSelection,
}

impl ClientError {
    /// Status code of a non-success response, if that is what failed.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::NoSelection => None,
        }
    }
}

/// Calls the four todo operations on a running server.
#[derive(Debug, Clone)]
pub struct TodoClient {
    client: reqwest::Client,
    endpoint: String,
}

impl TodoClient {
    /// Creates a client for the server at `base_url`, e.g. `http://127.0.0.1:3000`.
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/');
        Self {
            client,
            endpoint: format!("{base_url}{TODO_PATH}"),
        }
    }

    /// # Errors
    ///
    /// [`ClientError::Status`] on a non-success response, or a transport error.
    pub async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let body: TodoListResponse = read_success(response).await?;
        Ok(body.todos)
    }

    /// # Errors
    ///
    /// [`ClientError::Status`] on a non-success response, or a transport error.
    pub async fn create(&self, text: &str) -> Result<Todo, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "text": text }))
            .send()
            .await?;
        let body: TodoResponse = read_success(response).await?;
        Ok(body.todo)
    }

    /// # Errors
    ///
    /// [`ClientError::Status`] on a non-success response, or a transport error.
    pub async fn update(&self, id: TodoId, text: &str) -> Result<Todo, ClientError> {
        let response = self
            .client
            .patch(&self.endpoint)
            .json(&json!({ "id": id, "text": text }))
            .send()
            .await?;
        let body: TodoResponse = read_success(response).await?;
        Ok(body.todo)
    }

    /// # Errors
    ///
    /// [`ClientError::Status`] on a non-success response, or a transport error.
    pub async fn delete(&self, id: TodoId) -> Result<Todo, ClientError> {
        let response = self
            .client
            .delete(&self.endpoint)
            .json(&json!({ "id": id }))
            .send()
            .await?;
        let body: TodoResponse = read_success(response).await?;
        Ok(body.todo)
    }
}

async fn read_success<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let raw = response.text().await?;
    Err(ClientError::Status {
        status,
        message: failure_message(&raw).unwrap_or(raw),
    })
}

/// Failure bodies carry their text under `message`, except create which uses
/// `error`.
fn failure_message(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}
