//! In-memory implementation of the URL registry.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{RecordId, UrlRecord};
use crate::domain::error::RegistryError;
use crate::domain::repositories::{StorageHealth, UrlDeleter, UrlGetter, UrlSaver};

/// DashMap-backed registry for tests and throwaway runs.
///
/// Uniqueness comes from the entry API: the vacancy check and the insert
/// happen under the same shard lock, so concurrent saves of one alias produce
/// exactly one winner. Nothing survives a restart.
#[derive(Debug)]
pub struct InMemoryUrlRegistry {
    records: DashMap<String, UrlRecord>,
    /// url → alias, only maintained when duplicate URLs are rejected.
    urls: DashMap<String, String>,
    next_id: AtomicI64,
    reject_duplicate_urls: bool,
}

impl InMemoryUrlRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            urls: DashMap::new(),
            next_id: AtomicI64::new(1),
            reject_duplicate_urls: false,
        }
    }

    /// Enables or disables rejection of URLs that are already stored under another alias.
    pub fn with_duplicate_url_rejection(mut self, enabled: bool) -> Self {
        self.reject_duplicate_urls = enabled;
        self
    }

    /// Returns a copy of the record stored under `alias`.
    pub fn find_record(&self, alias: &str) -> Option<UrlRecord> {
        self.records.get(alias).map(|r| r.value().clone())
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn claim_url(&self, url: &str, alias: &str) -> Result<(), RegistryError> {
        match self.urls.entry(url.to_string()) {
            Entry::Occupied(_) => Err(RegistryError::UrlExists(url.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(alias.to_string());
                Ok(())
            }
        }
    }

    fn release_url(&self, url: &str, alias: &str) {
        self.urls.remove_if(url, |_, owner| owner == alias);
    }
}

impl Default for InMemoryUrlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlSaver for InMemoryUrlRegistry {
    async fn save(&self, url: &str, alias: &str) -> Result<RecordId, RegistryError> {
        if self.reject_duplicate_urls {
            self.claim_url(url, alias)?;
        }

        match self.records.entry(alias.to_string()) {
            Entry::Occupied(_) => {
                if self.reject_duplicate_urls {
                    self.release_url(url, alias);
                }
                Err(RegistryError::AliasExists(alias.to_string()))
            }
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                slot.insert(UrlRecord::new(id, alias, url));
                Ok(id)
            }
        }
    }
}

#[async_trait]
impl UrlGetter for InMemoryUrlRegistry {
    async fn get(&self, alias: &str) -> Result<String, RegistryError> {
        self.records
            .get(alias)
            .map(|r| r.url.clone())
            .ok_or_else(|| RegistryError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl UrlDeleter for InMemoryUrlRegistry {
    async fn delete(&self, alias: &str) -> Result<(), RegistryError> {
        let Some((_, record)) = self.records.remove(alias) else {
            return Err(RegistryError::NotFound(alias.to_string()));
        };

        if self.reject_duplicate_urls {
            self.release_url(&record.url, alias);
        }

        Ok(())
    }
}

#[async_trait]
impl StorageHealth for InMemoryUrlRegistry {
    async fn ping(&self) -> Result<(), RegistryError> {
        Ok(())
    }
}
