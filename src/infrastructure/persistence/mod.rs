//! Registry implementations.
//!
//! - [`SqliteUrlRegistry`] - SQLite via SQLx, schema managed by [`MIGRATOR`]
//! - [`InMemoryUrlRegistry`] - DashMap-backed, nothing persisted

pub mod memory_url_registry;
pub mod sqlite_url_registry;

pub use memory_url_registry::InMemoryUrlRegistry;
pub use sqlite_url_registry::SqliteUrlRegistry;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection pool sizing.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Opens a SQLite pool, creating the database file (and its directory) if missing.
///
/// Migrations are not applied here; run [`MIGRATOR`] against the pool.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the directory cannot be created,
/// or the first connection fails.
pub async fn open_pool(
    database_url: &str,
    settings: &PoolSettings,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    if let Some(dir) = options.get_filename().parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)?;
    }

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
}
