//! Todo service.
//!
//! A thin façade over [`TodoRepository`]: each operation forwards to the
//! store and propagates its error untouched. Failures are logged here so the
//! route layer can keep its responses generic.

use std::sync::Arc;

use crate::domain::{Todo, TodoId, TodoText};
use crate::infrastructure::{RepositoryError, TodoRepository};

#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl std::fmt::Debug for TodoService {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("TodoService").finish_non_exhaustive()
    }
}

impl TodoService {
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new todo.
    ///
    /// # Errors
    ///
    /// Propagates any [`RepositoryError`] from the store.
    pub async fn create(&self, text: TodoText) -> Result<Todo, RepositoryError> {
        self.repository
            .create(text)
            .await
            .inspect(|todo| tracing::debug!(id = %todo.id, "Created todo"))
            .inspect_err(|error| tracing::error!(%error, "Failed to create todo"))
    }

    /// Returns all todos, most recent first.
    ///
    /// # Errors
    ///
    /// Propagates any [`RepositoryError`] from the store.
    pub async fn list_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        self.repository
            .list_all()
            .await
            .inspect_err(|error| tracing::error!(%error, "Failed to list todos"))
    }

    /// Replaces the text of an existing todo.
    ///
    /// # Errors
    ///
    /// [`RepositoryError::NotFound`] if `id` does not exist, or any other
    /// store error.
    pub async fn update(&self, id: TodoId, text: TodoText) -> Result<Todo, RepositoryError> {
        self.repository
            .update(id, text)
            .await
            .inspect(|todo| tracing::debug!(id = %todo.id, "Updated todo"))
            .inspect_err(|error| tracing::error!(%id, %error, "Failed to update todo"))
    }

    /// Deletes a todo and returns its last state.
    ///
    /// # Errors
    ///
    /// [`RepositoryError::NotFound`] if `id` does not exist, or any other
    /// store error.
    pub async fn delete(&self, id: TodoId) -> Result<Todo, RepositoryError> {
        self.repository
            .delete(id)
            .await
            .inspect(|todo| tracing::debug!(id = %todo.id, "Deleted todo"))
            .inspect_err(|error| tracing::error!(%id, %error, "Failed to delete todo"))
    }
}

// =============================================================================
// Tests
// =============================================================================
