//! Domain module for todo items.
//!
//! This module contains the todo entity and its value objects.

pub mod todo;

pub use todo::{Todo, TodoId, TodoText, ValidationError};
