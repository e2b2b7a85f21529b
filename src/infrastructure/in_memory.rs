//! In-memory repository implementation.
//!
//! Suitable for tests and local development. State lives for the lifetime
//! of the process.
//!
//! - Thread-safe with `Arc<RwLock<...>>`
//! - Ids are assigned from a counter starting at 1 and never reused

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{Todo, TodoId, TodoText};
use crate::infrastructure::{RepositoryError, RepositoryFuture, TodoRepository};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<TodoId, Todo>,
    last_id: i64,
}

/// In-memory implementation of `TodoRepository`.
///
/// # Example
///
/// ```ignore
/// use todo_app::infrastructure::InMemoryTodoRepository;
///
/// let repository = InMemoryTodoRepository::new();
/// let todo = repository.create(TodoText::parse("buy milk")?).await?;
/// assert_eq!(todo.id.get(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTodoRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[allow(clippy::significant_drop_tightening)]
impl TodoRepository for InMemoryTodoRepository {
    fn create(&self, text: TodoText) -> RepositoryFuture<Todo> {
        let table = Arc::clone(&self.table);
        Box::pin(async move {
            let mut guard = table.write().await;
            guard.last_id += 1;
            let todo = Todo::new(TodoId::new(guard.last_id), text, Utc::now());
            guard.rows.insert(todo.id, todo.clone());
            Ok(todo)
        })
    }

    fn list_all(&self) -> RepositoryFuture<Vec<Todo>> {
        let table = Arc::clone(&self.table);
        Box::pin(async move {
            let guard = table.read().await;
            Ok(guard.rows.values().rev().cloned().collect())
        })
    }

    fn update(&self, id: TodoId, text: TodoText) -> RepositoryFuture<Todo> {
        let table = Arc::clone(&self.table);
        Box::pin(async move {
            let mut guard = table.write().await;
            let row = guard
                .rows
                .get_mut(&id)
                .ok_or(RepositoryError::NotFound(id))?;
            row.text = text;
            Ok(row.clone())
        })
    }

    fn delete(&self, id: TodoId) -> RepositoryFuture<Todo> {
        let table = Arc::clone(&self.table);
        Box::pin(async move {
            let mut guard = table.write().await;
            guard.rows.remove(&id).ok_or(RepositoryError::NotFound(id))
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repository() -> InMemoryTodoRepository {
        InMemoryTodoRepository::new()
    }

    fn text(value: &str) -> TodoText {
        TodoText::parse(value).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_increasing_ids(repository: InMemoryTodoRepository) {
        let first = repository.create(text("a")).await.unwrap();
        let second = repository.create(text("b")).await.unwrap();

        assert_eq!(first.id, TodoId::new(1));
        assert_eq!(second.id, TodoId::new(2));
        assert!(second.created_at >= first.created_at);
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_returns_newest_first(repository: InMemoryTodoRepository) {
        for value in ["A", "B", "C"] {
            repository.create(text(value)).await.unwrap();
        }

        let texts: Vec<String> = repository
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|todo| todo.text.into_inner())
            .collect();

        assert_eq!(texts, vec!["C", "B", "A"]);
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_on_empty_store(repository: InMemoryTodoRepository) {
        assert!(repository.list_all().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn update_changes_only_text(repository: InMemoryTodoRepository) {
        let created = repository.create(text("old")).await.unwrap();

        let updated = repository.update(created.id, text("new")).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.text.as_str(), "new");
    }

    #[rstest]
    #[tokio::test]
    async fn update_unknown_id_is_not_found(repository: InMemoryTodoRepository) {
        let error = repository
            .update(TodoId::new(99), text("x"))
            .await
            .unwrap_err();

        assert_eq!(error, RepositoryError::NotFound(TodoId::new(99)));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_returns_prior_state_and_removes_row(repository: InMemoryTodoRepository) {
        let created = repository.create(text("gone soon")).await.unwrap();

        let deleted = repository.delete(created.id).await.unwrap();

        assert_eq!(deleted, created);
        assert!(repository.list_all().await.unwrap().is_empty());
        assert!(repository.delete(created.id).await.unwrap_err().is_not_found());
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repository: InMemoryTodoRepository) {
        let first = repository.create(text("a")).await.unwrap();
        repository.delete(first.id).await.unwrap();

        let second = repository.create(text("b")).await.unwrap();

        assert_ne!(first.id, second.id);
    }
}
