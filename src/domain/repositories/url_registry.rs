//! Capability traits for the URL registry.
//!
//! Each trait exposes exactly one registry operation so that a caller can
//! depend on only what it uses: the save flow needs a [`UrlSaver`], the
//! redirect handler a [`UrlGetter`], the delete handler a [`UrlDeleter`].

use crate::domain::entities::RecordId;
use crate::domain::error::RegistryError;
use async_trait::async_trait;

/// Inserts new alias → URL records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Stores `url` under `alias` and returns the id the store assigned.
    ///
    /// `url` and `alias` must already be validated and `alias` must be non-empty.
    /// Uniqueness is enforced by the store itself in the same atomic step as the
    /// insert, so two concurrent saves of one alias cannot both succeed.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::AliasExists`] if a live record already holds `alias`
    /// - [`RegistryError::UrlExists`] if duplicate URLs are rejected and `url` is stored
    /// - [`RegistryError::StorageFailure`] on any other persistence error
    async fn save(&self, url: &str, alias: &str) -> Result<RecordId, RegistryError>;
}

/// Resolves aliases to URLs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if no live record has `alias`
    /// - [`RegistryError::StorageFailure`] on persistence errors
    async fn get(&self, alias: &str) -> Result<String, RegistryError>;
}

/// Removes records by alias.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlDeleter: Send + Sync {
    /// Permanently removes the record stored under `alias`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if nothing was deleted
    /// - [`RegistryError::StorageFailure`] on persistence errors
    async fn delete(&self, alias: &str) -> Result<(), RegistryError>;
}

/// Reports whether the backing store is reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Runs a trivial round-trip against the store.
    async fn ping(&self) -> Result<(), RegistryError>;
}

/// A full registry: every capability at once.
///
/// Blanket-implemented, so any type providing the individual traits is a `UrlRegistry`.
pub trait UrlRegistry: UrlSaver + UrlGetter + UrlDeleter + StorageHealth {}

impl<T> UrlRegistry for T where T: UrlSaver + UrlGetter + UrlDeleter + StorageHealth {}
