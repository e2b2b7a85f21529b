//! Infrastructure module for external services.
//!
//! This module contains the todo repositories, configuration loading, and
//! the factory that wires them together.

pub mod config;
pub mod factory;
pub mod in_memory;
pub mod postgres;
pub mod repository;

pub use config::{AppConfig, ConfigurationError, LogFormat, StorageMode};
pub use factory::{FactoryError, RepositoryFactory};
pub use in_memory::InMemoryTodoRepository;
pub use postgres::{PostgresPoolConfig, PostgresTodoRepository};
pub use repository::{RepositoryError, RepositoryFuture, TodoRepository};
