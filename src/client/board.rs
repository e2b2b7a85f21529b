//! Client-side list state.
//!
//! [`TodoBoard`] owns the displayed todos and the single selected id whose
//! edit panel is open. Every mutation is followed by a full reload; nothing is
//! patched locally.

use super::http::{ClientError, TodoClient};
use crate::domain::{Todo, TodoId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoBoard {
    todos: Vec<Todo>,
    selected: Option<TodoId>,
}

impl TodoBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    #[must_use]
    pub const fn selected(&self) -> Option<TodoId> {
        self.selected
    }

    /// Selects `id`, or clears the selection if `id` is already selected.
    pub fn toggle_selection(&mut self, id: TodoId) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Whether the edit panel for `id` is open.
    #[must_use]
    pub fn is_editing(&self, id: TodoId) -> bool {
        self.selected == Some(id)
    }

    /// Replaces the displayed todos with the server's list.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`]; the board is left unchanged.
    pub async fn load(&mut self, client: &TodoClient) -> Result<(), ClientError> {
        let todos = client
            .list()
            .await
            .inspect_err(|error| tracing::warn!(%error, "Failed to load todos"))?;
        self.replace(todos);
        Ok(())
    }

    /// Creates a todo, then reloads.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] from the create or the reload.
    pub async fn submit_new(
        &mut self,
        client: &TodoClient,
        text: &str,
    ) -> Result<Todo, ClientError> {
        let created = client
            .create(text)
            .await
            .inspect_err(|error| tracing::warn!(%error, "Failed to create todo"))?;
        self.load(client).await?;
        Ok(created)
    }

    /// Updates the selected todo, then reloads.
    ///
    /// # Errors
    ///
    /// [`ClientError::NoSelection`] if nothing is selected, otherwise any
    /// [`ClientError`] from the update or the reload.
    pub async fn submit_edit(
        &mut self,
        client: &TodoClient,
        text: &str,
    ) -> Result<Todo, ClientError> {
        let id = self.selected.ok_or(ClientError::NoSelection)?;
        let updated = client
            .update(id, text)
            .await
            .inspect_err(|error| tracing::warn!(%id, %error, "Failed to update todo"))?;
        self.load(client).await?;
        Ok(updated)
    }

    /// Deletes `id`, then reloads.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] from the delete or the reload.
    pub async fn delete(&mut self, client: &TodoClient, id: TodoId) -> Result<Todo, ClientError> {
        let deleted = client
            .delete(id)
            .await
            .inspect_err(|error| tracing::warn!(%id, %error, "Failed to delete todo"))?;
        self.load(client).await?;
        Ok(deleted)
    }

    fn replace(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        if let Some(selected) = self.selected
            && !self.todos.iter().any(|todo| todo.id == selected)
        {
            tracing::debug!(id = %selected, "Clearing selection of a removed todo");
            self.selected = None;
        }
    }
}
