//! Todo App Library
//!
//! A small todo-list web application: a browser page and a Rust client talk
//! to four JSON routes on `/api/todo`, backed by an in-memory or `PostgreSQL`
//! table.

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;
