//! Todo App server
//!
//! Serves the todo board page at `/` and the JSON routes at `/api/todo`.
//!
//! # Environment Variables
//!
//! - `STORAGE_MODE`: `in_memory` | `postgres` (default: `postgres` if `DATABASE_URL` is set)
//! - `DATABASE_URL`: `PostgreSQL` connection URL (required when `STORAGE_MODE=postgres`)
//! - `DATABASE_MAX_CONNECTIONS`: Pool size (default: `5`)
//! - `TODO_LEGACY_CREATE_STATUS`: Answer create without text with 404 instead of 400
//! - `RUST_LOG`: Logging level (e.g., `debug`, `info`, `todo_app=debug`)
//! - `LOG_FORMAT`: `pretty` (default) | `json`
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3000`)
//! - `WORKER_THREADS`: Number of tokio worker threads (default: logical CPU count)

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use todo_app::api::{AppState, create_router};
use todo_app::application::TodoService;
use todo_app::infrastructure::{AppConfig, LogFormat, RepositoryFactory};

const DEFAULT_LOG_FILTER: &str = "todo_app=debug,tower_http=debug";

/// Reads `WORKER_THREADS`, warning on stderr and falling back to the tokio
/// default when the value is unusable. Runs before tracing is set up.
fn parse_worker_threads() -> Option<usize> {
    let value = std::env::var("WORKER_THREADS").ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<usize>() {
        Ok(0) => {
            eprintln!("Warning: WORKER_THREADS=0 is invalid (must be > 0), using default");
            None
        }
        Ok(threads) => Some(threads),
        Err(error) => {
            eprintln!(
                "Warning: WORKER_THREADS='{trimmed}' is not a valid number ({error}), using default"
            );
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = parse_worker_threads() {
        builder.worker_threads(threads);
    }

    let runtime = builder.build().context("Failed to create tokio runtime")?;
    runtime.block_on(async_main())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn async_main() -> anyhow::Result<()> {
    // The log format is itself configured, so tracing starts after the config loads.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            init_tracing(LogFormat::default());
            tracing::error!(%error, "Configuration error");
            return Err(error).context("Invalid configuration");
        }
    };
    init_tracing(config.log_format);

    tracing::info!(
        storage_mode = ?config.storage_mode,
        legacy_create_status = config.legacy_create_status,
        "Starting Todo App"
    );

    let repository = RepositoryFactory::new(&config)
        .create()
        .await
        .context("Failed to initialize storage")?;

    let state = AppState::new(TodoService::new(repository))
        .with_legacy_create_status(config.legacy_create_status);
    let application = create_router(state);

    let address = config.socket_addr();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to address {address}"))?;

    match listener.local_addr() {
        Ok(address) => tracing::info!("Listening on {}", address),
        Err(error) => tracing::warn!(%error, "Could not determine local address"),
    }

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Completes on Ctrl+C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
