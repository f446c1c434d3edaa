//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Storage
//!
//! ```bash
//! export DATABASE_URL="sqlite://./storage/storage.db"
//! # or
//! export STORAGE_PATH="./storage/storage.db"
//! ```
//!
//! `DATABASE_URL` takes priority. Without it the URL is built from
//! `STORAGE_PATH` (default `./storage/storage.db`).
//!
//! ## Required Variables
//!
//! - `AUTH_USER`, `AUTH_PASSWORD` - Basic-auth credentials for write endpoints
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`); picks logging defaults
//! - `LISTEN` - Bind address (default: `0.0.0.0:8082`)
//! - `RUST_LOG` - Log filter (default: `debug` for local/dev, `info` for prod)
//! - `LOG_FORMAT` - `text` or `json` (default: `text` for local, `json` otherwise)
//! - `HTTP_TIMEOUT` - Request timeout in seconds (default: 4)
//! - `ALIAS_LENGTH` - Generated alias length (default: 6, range 3-20)
//! - `ALIAS_MAX_ATTEMPTS` - Generated candidates per save (default: 5, range 1-100)
//! - `REJECT_DUPLICATE_URLS` - Refuse a URL that is already stored (default: `false`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//!
//! The storage and alias-generation variables form [`StorageConfig`], which
//! the admin CLI loads on its own through [`load_storage_from_env`].

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::SavePolicy;
use crate::infrastructure::persistence::PoolSettings;
use crate::utils::validator::{MAX_ALIAS_LENGTH, MIN_ALIAS_LENGTH};

/// Default SQLite file used when neither `DATABASE_URL` nor `STORAGE_PATH` is set.
pub const DEFAULT_STORAGE_PATH: &str = "./storage/storage.db";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl AppEnv {
    /// Default `RUST_LOG` filter for this environment.
    pub fn default_log_level(self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }

    /// Default `LOG_FORMAT` for this environment.
    pub fn default_log_format(self) -> &'static str {
        match self {
            AppEnv::Local => "text",
            AppEnv::Dev | AppEnv::Prod => "json",
        }
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{other}'"),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        })
    }
}

/// Registry-side settings shared by the server and the admin CLI.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_url: String,
    pub alias_length: usize,
    pub alias_max_attempts: usize,
    pub reject_duplicate_urls: bool,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl StorageConfig {
    /// Loads storage settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let alias_length = parse_var("ALIAS_LENGTH", 6)?;
        let alias_max_attempts = parse_var("ALIAS_MAX_ATTEMPTS", 5)?;

        let reject_duplicate_urls = env::var("REJECT_DUPLICATE_URLS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT", 30)?;

        Ok(Self {
            database_url,
            alias_length,
            alias_max_attempts,
            reject_duplicate_urls,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Resolves the SQLite URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `STORAGE_PATH` (default [`DEFAULT_STORAGE_PATH`])
    pub fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("STORAGE_PATH").unwrap_or_else(|_| DEFAULT_STORAGE_PATH.to_string());

        format!("sqlite://{path}")
    }

    /// Validates the storage settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        let alias_range = MIN_ALIAS_LENGTH as usize..=MAX_ALIAS_LENGTH as usize;
        if !alias_range.contains(&self.alias_length) {
            anyhow::bail!(
                "ALIAS_LENGTH must be between {} and {}, got {}",
                MIN_ALIAS_LENGTH,
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.alias_max_attempts == 0 || self.alias_max_attempts > 100 {
            anyhow::bail!(
                "ALIAS_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.alias_max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Alias generation policy for the save flow.
    pub fn save_policy(&self) -> SavePolicy {
        SavePolicy {
            alias_length: self.alias_length,
            max_attempts: self.alias_max_attempts,
        }
    }

    /// Pool sizing for [`crate::infrastructure::persistence::open_pool`].
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_connect_timeout),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub app_env: AppEnv,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Request timeout in seconds (`HTTP_TIMEOUT`).
    pub http_timeout: u64,
    pub auth_user: String,
    pub auth_password: String,
    pub storage: StorageConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("app_env", &self.app_env)
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("http_timeout", &self.http_timeout)
            .field("auth_user", &self.auth_user)
            .field("auth_password", &"***")
            .field("storage", &self.storage)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let app_env = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => AppEnv::Local,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8082".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| app_env.default_log_level().to_string());
        let log_format =
            env::var("LOG_FORMAT").unwrap_or_else(|_| app_env.default_log_format().to_string());

        let http_timeout = parse_var("HTTP_TIMEOUT", 4)?;

        let auth_user = env::var("AUTH_USER").context("AUTH_USER must be set")?;
        let auth_password = env::var("AUTH_PASSWORD").context("AUTH_PASSWORD must be set")?;

        let storage = StorageConfig::from_env()?;

        Ok(Self {
            app_env,
            listen_addr,
            log_level,
            log_format,
            http_timeout,
            auth_user,
            auth_password,
            storage,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.auth_user.is_empty() {
            anyhow::bail!("AUTH_USER must not be empty");
        }
        if self.auth_password.is_empty() {
            anyhow::bail!("AUTH_PASSWORD must not be empty");
        }

        self.storage.validate()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.app_env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.storage.database_url);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!("  Auth user: {}", self.auth_user);
        tracing::info!(
            "  Alias generation: length {}, {} attempts",
            self.storage.alias_length,
            self.storage.alias_max_attempts
        );
        tracing::info!(
            "  Reject duplicate URLs: {}",
            self.storage.reject_duplicate_urls
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Loads and validates only the storage settings; the HTTP and auth
/// variables are not required.
///
/// # Errors
///
/// Returns an error if a value cannot be parsed or validation fails.
pub fn load_storage_from_env() -> Result<StorageConfig> {
    let storage = StorageConfig::from_env()?;
    storage.validate()?;
    Ok(storage)
}
