//! SQLite implementation of the URL registry.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{RecordId, UrlRecord};
use crate::domain::error::RegistryError;
use crate::domain::repositories::{StorageHealth, UrlDeleter, UrlGetter, UrlSaver};
use crate::utils::db_error::map_insert_error;

const INSERT: &str = "INSERT INTO url (url, alias) VALUES (?1, ?2)";

/// Inserts nothing when the URL is already stored; the check and the insert are one statement.
const INSERT_UNLESS_URL_EXISTS: &str = r#"
    INSERT INTO url (url, alias)
    SELECT ?1, ?2
    WHERE NOT EXISTS (SELECT 1 FROM url WHERE url = ?1)
"#;

/// SQLite registry for alias → URL records.
///
/// Alias uniqueness is the `UNIQUE` constraint on `url.alias`; this type takes
/// no locks of its own. With duplicate-URL rejection enabled, the URL check is
/// folded into the insert statement so it runs under SQLite's write lock.
#[derive(Debug, Clone)]
pub struct SqliteUrlRegistry {
    pool: SqlitePool,
    reject_duplicate_urls: bool,
}

impl SqliteUrlRegistry {
    /// Creates a registry over an already-migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            reject_duplicate_urls: false,
        }
    }

    /// Enables or disables rejection of URLs that are already stored under another alias.
    pub fn with_duplicate_url_rejection(mut self, enabled: bool) -> Self {
        self.reject_duplicate_urls = enabled;
        self
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Fetches the full record for `alias`, id included.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageFailure`] on database errors.
    pub async fn find_record(&self, alias: &str) -> Result<Option<UrlRecord>, RegistryError> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, alias, url FROM url WHERE alias = ?1")
                .bind(alias)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, alias, url)| UrlRecord::new(id, alias, url)))
    }

    /// Counts live records.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageFailure`] on database errors.
    pub async fn count(&self) -> Result<i64, RegistryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl UrlSaver for SqliteUrlRegistry {
    async fn save(&self, url: &str, alias: &str) -> Result<RecordId, RegistryError> {
        let sql = if self.reject_duplicate_urls {
            INSERT_UNLESS_URL_EXISTS
        } else {
            INSERT
        };

        let result = sqlx::query(sql)
            .bind(url)
            .bind(alias)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, alias))?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::UrlExists(url.to_string()));
        }

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl UrlGetter for SqliteUrlRegistry {
    async fn get(&self, alias: &str) -> Result<String, RegistryError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM url WHERE alias = ?1")
            .bind(alias)
            .fetch_optional(&self.pool)
            .await?;

        url.ok_or_else(|| RegistryError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl UrlDeleter for SqliteUrlRegistry {
    async fn delete(&self, alias: &str) -> Result<(), RegistryError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?1")
            .bind(alias)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::NotFound(alias.to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl StorageHealth for SqliteUrlRegistry {
    async fn ping(&self) -> Result<(), RegistryError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }
}
