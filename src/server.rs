//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, state wiring and the Axum server lifecycle.

use crate::application::services::AuthService;
use crate::config::Config;
use crate::infrastructure::persistence::{MIGRATOR, SqliteUrlRegistry, open_pool};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (database file created if missing)
/// - Schema migrations
/// - Registry, save flow and basic-auth check
/// - Axum HTTP server, stopped gracefully on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = open_pool(&config.storage.database_url, &config.storage.pool_settings())
        .await
        .context("Failed to open storage")?;
    tracing::info!("Connected to database");

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let registry = Arc::new(
        SqliteUrlRegistry::new(pool.clone())
            .with_duplicate_url_rejection(config.storage.reject_duplicate_urls),
    );

    let auth_service = AuthService::new(&config.auth_user, &config.auth_password)
        .map_err(|e| anyhow::anyhow!("Failed to initialize auth: {e}"))?;

    let state = AppState::from_registry(
        registry,
        Arc::new(RandomAliasGenerator::new()),
        config.storage.save_policy(),
        auth_service,
    );

    let app = app_router(state, config.request_timeout());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
