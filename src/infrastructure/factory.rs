//! Repository factory for runtime backend selection.
//!
//! Picks the in-memory or `PostgreSQL` store according to [`AppConfig`].
//!
//! # Example
//!
//! ```ignore
//! use todo_app::infrastructure::{AppConfig, RepositoryFactory};
//!
//! let config = AppConfig::from_env()?;
//! let repository = RepositoryFactory::new(&config).create().await?;
//! ```

use std::sync::Arc;

use thiserror::Error;

use super::{
    AppConfig, ConfigurationError, InMemoryTodoRepository, PostgresPoolConfig,
    PostgresTodoRepository, RepositoryError, StorageMode, TodoRepository,
};

/// Errors raised while building the repository.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to initialize storage: {0}")]
    Storage(#[from] RepositoryError),
}

/// Creates the configured `TodoRepository`.
#[derive(Debug, Clone)]
pub struct RepositoryFactory {
    storage_mode: StorageMode,
    database_url: Option<String>,
    max_connections: u32,
}

impl RepositoryFactory {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            storage_mode: config.storage_mode,
            database_url: config.database_url.clone(),
            max_connections: config.database_max_connections,
        }
    }

    /// Connects to the selected backend.
    ///
    /// In postgres mode this opens the pool and ensures the `"Todo"` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] if the database URL is missing or the store
    /// cannot be initialized.
    pub async fn create(&self) -> Result<Arc<dyn TodoRepository>, FactoryError> {
        match self.storage_mode {
            StorageMode::InMemory => {
                tracing::info!("Using in-memory todo storage");
                Ok(Arc::new(InMemoryTodoRepository::new()))
            }
            StorageMode::Postgres => {
                let url = self
                    .database_url
                    .as_deref()
                    .ok_or(ConfigurationError::MissingDatabaseUrl)?;
                let pool = PostgresPoolConfig::with_url(url)
                    .with_max_connections(self.max_connections)
                    .connect()
                    .await?;
                let repository = PostgresTodoRepository::new(pool);
                repository.ensure_schema().await?;
                tracing::info!(
                    max_connections = self.max_connections,
                    "Using PostgreSQL todo storage"
                );
                Ok(Arc::new(repository))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
