//! Todo domain model.
//!
//! A todo is a short piece of text with a store-assigned identifier and
//! creation timestamp. The text is the only mutable field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Errors raised when constructing domain values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Todo text was empty.
    #[error("todo text must not be empty")]
    EmptyText,
}

// =============================================================================
// Value Objects - Newtypes
// =============================================================================

/// Identifier of a todo, assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Interprets an optional request value the way clients send it.
    ///
    /// Zero is treated as "no id" because clients use it as the
    /// "nothing selected" sentinel.
    #[must_use]
    pub const fn from_request(value: Option<i64>) -> Option<Self> {
        match value {
            Some(0) | None => None,
            Some(value) => Some(Self(value)),
        }
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Non-empty todo text.
///
/// Only presence is checked: whitespace-only text is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoText(String);

impl TodoText {
    /// Parses text, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyText`] when `value` is empty.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value: String = value.into();
        if value.is_empty() {
            Err(ValidationError::EmptyText)
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for TodoText {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TodoText> for String {
    fn from(text: TodoText) -> Self {
        text.0
    }
}

impl std::fmt::Display for TodoText {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

// =============================================================================
// Todo Entity
// =============================================================================

/// A stored todo item.
///
/// Serialized as `{"id": 1, "text": "...", "createdAt": "2024-01-01T00:00:00Z"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: TodoText,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    #[must_use]
    pub const fn new(id: TodoId, text: TodoText, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            created_at,
        }
    }

    /// Returns a copy with the text replaced; `id` and `created_at` are kept.
    #[must_use]
    pub fn with_text(self, text: TodoText) -> Self {
        Self { text, ..self }
    }
}

// =============================================================================
// Tests
// =============================================================================
