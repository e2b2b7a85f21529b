//! Repository trait for todo items.
//!
//! Every operation returns a boxed `'static` future so the trait stays
//! object-safe and implementations can be selected at runtime behind
//! `Arc<dyn TodoRepository>`.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::domain::{Todo, TodoId, TodoText};

// =============================================================================
// Repository Error
// =============================================================================

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No row matches the identifier.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// A statement failed (constraint violation, type mismatch, ...).
    #[error("Database error: {0}")]
    Database(String),

    /// The store could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Future returned by every repository operation.
pub type RepositoryFuture<T> = BoxFuture<'static, Result<T, RepositoryError>>;

// =============================================================================
// Todo Repository
// =============================================================================

/// Storage for todo items.
///
/// Each operation touches at most one row; there are no multi-operation
/// transactions.
pub trait TodoRepository: Send + Sync {
    /// Inserts a new todo. The store assigns `id` and `created_at`.
    fn create(&self, text: TodoText) -> RepositoryFuture<Todo>;

    /// Returns every todo, most recent (highest id) first.
    fn list_all(&self) -> RepositoryFuture<Vec<Todo>>;

    /// Replaces the text of an existing todo.
    ///
    /// # Errors
    ///
    /// Resolves to [`RepositoryError::NotFound`] if `id` does not exist.
    fn update(&self, id: TodoId, text: TodoText) -> RepositoryFuture<Todo>;

    /// Removes a todo and returns the row as it was before deletion.
    ///
    /// # Errors
    ///
    /// Resolves to [`RepositoryError::NotFound`] if `id` does not exist.
    fn delete(&self, id: TodoId) -> RepositoryFuture<Todo>;
}

// =============================================================================
// Tests
// =============================================================================
