//! Registry trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`:
//!
//! - `SqliteUrlRegistry` - SQLite via SQLx, the production store
//! - `InMemoryUrlRegistry` - DashMap-backed store for tests and throwaway runs
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod url_registry;

pub use url_registry::{StorageHealth, UrlDeleter, UrlGetter, UrlRegistry, UrlSaver};

#[cfg(test)]
pub use url_registry::{MockStorageHealth, MockUrlDeleter, MockUrlGetter, MockUrlSaver};
