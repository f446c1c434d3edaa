//! Classification of SQLx errors into registry error kinds.

use crate::domain::error::RegistryError;

/// Returns true if `e` is a UNIQUE violation on the `url.alias` column.
///
/// SQLite reports no constraint name, only the message
/// `UNIQUE constraint failed: url.alias`, so the column is matched there.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("url.alias")
}

/// Maps an insert error: alias UNIQUE violations become [`RegistryError::AliasExists`],
/// everything else is a storage failure.
pub fn map_insert_error(e: sqlx::Error, alias: &str) -> RegistryError {
    if is_unique_violation_on_alias(&e) {
        return RegistryError::AliasExists(alias.to_string());
    }

    RegistryError::storage(e)
}

impl From<sqlx::Error> for RegistryError {
    fn from(e: sqlx::Error) -> Self {
        RegistryError::storage(e)
    }
}
