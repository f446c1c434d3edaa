//! CLI administration tool for url-alias.
//!
//! Works directly against the SQLite database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a URL (alias generated when omitted)
//! cargo run --bin admin -- save https://example.com --alias docs
//!
//! # Look up an alias
//! cargo run --bin admin -- get docs
//!
//! # Remove an alias
//! cargo run --bin admin -- delete docs
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `STORAGE_PATH`: SQLite database, same resolution as the server
//! - `ALIAS_LENGTH`, `ALIAS_MAX_ATTEMPTS`, `REJECT_DUPLICATE_URLS`: save policy, as for the server
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`: pool settings

use url_alias::application::services::LinkService;
use url_alias::config::{StorageConfig, load_storage_from_env};
use url_alias::domain::error::RegistryError;
use url_alias::domain::repositories::{UrlDeleter, UrlGetter};
use url_alias::infrastructure::persistence::{MIGRATOR, SqliteUrlRegistry, open_pool};
use url_alias::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Register a URL under an alias
    Save {
        /// Target URL
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Get {
        alias: String,
    },

    /// Remove an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage = load_storage_from_env().context("Invalid storage configuration")?;

    let pool = open_pool(&storage.database_url, &storage.pool_settings())
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Save { url, alias } => {
            let registry = registry(&pool, &storage).await?;
            save_url(registry, &storage, &url, alias.as_deref()).await?
        }
        Commands::Get { alias } => get_url(registry(&pool, &storage).await?, &alias).await?,
        Commands::Delete { alias, yes } => {
            delete_url(registry(&pool, &storage).await?, &alias, yes).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Applies pending migrations and wraps the pool in a registry with the
/// configured duplicate-URL policy.
async fn registry(pool: &SqlitePool, storage: &StorageConfig) -> Result<Arc<SqliteUrlRegistry>> {
    MIGRATOR.run(pool).await.context("Failed to migrate")?;
    Ok(Arc::new(
        SqliteUrlRegistry::new(pool.clone())
            .with_duplicate_url_rejection(storage.reject_duplicate_urls),
    ))
}

/// Runs the same save flow as `POST /url` and prints the resulting alias.
async fn save_url(
    registry: Arc<SqliteUrlRegistry>,
    storage: &StorageConfig,
    url: &str,
    alias: Option<&str>,
) -> Result<()> {
    println!("{}", "➕ Save URL".bright_blue().bold());
    println!();

    let service = LinkService::new(
        registry,
        Arc::new(RandomAliasGenerator::new()),
        storage.save_policy(),
    );

    let saved = service
        .save(url, alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save url: {}", e))?;

    println!("  URL:   {}", url.cyan());
    println!("  Alias: {}", saved.alias.bright_yellow().bold());
    println!("  ID:    {}", saved.id.to_string().bright_black());
    println!();
    println!("{}", "✅ Saved".green().bold());

    Ok(())
}

async fn get_url(registry: Arc<SqliteUrlRegistry>, alias: &str) -> Result<()> {
    match registry.get(alias).await {
        Ok(url) => {
            println!("{}", url);
            Ok(())
        }
        Err(RegistryError::NotFound(_)) => {
            println!("{}", format!("⚠️  Alias '{}' not found", alias).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Database error: {}", e)),
    }
}

/// Deletes an alias after showing the record and asking for confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
async fn delete_url(registry: Arc<SqliteUrlRegistry>, alias: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Alias".bright_blue().bold());
    println!();

    let record = registry
        .find_record(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let Some(record) = record else {
        println!("{}", format!("⚠️  Alias '{}' not found", alias).yellow());
        return Ok(());
    };

    println!("  Alias: {}", record.alias.cyan());
    println!("  URL:   {}", record.url.bright_white());
    println!("  ID:    {}", record.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match registry.delete(alias).await {
        Ok(()) => {
            println!("{}", "✅ Alias deleted".green().bold());
            Ok(())
        }
        Err(RegistryError::NotFound(_)) => {
            println!("{}", "⚠️  Alias was already removed".yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to delete alias: {}", e)),
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
