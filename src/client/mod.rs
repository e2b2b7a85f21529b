//! Rust client for the todo routes and the list state a UI keeps on top of it.

pub mod board;
pub mod http;

pub use board::TodoBoard;
pub use http::{ClientError, TodoClient};
