//! Save flow: validation, alias generation and the collision retry loop.

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::SavedUrl;
use crate::domain::error::RegistryError;
use crate::domain::repositories::UrlSaver;
use crate::utils::alias_generator::{AliasGenerator, DEFAULT_ALIAS_LENGTH};
use crate::utils::validator::{is_reserved_alias, validate_alias, validate_url};

/// Default number of generated candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// How aliases are generated when the caller supplies none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavePolicy {
    /// Length of generated aliases.
    pub alias_length: usize,
    /// Generated candidates tried before returning [`RegistryError::AliasSpaceExhausted`].
    pub max_attempts: usize,
}

impl Default for SavePolicy {
    fn default() -> Self {
        Self {
            alias_length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Runs the write path in front of a [`UrlSaver`].
///
/// Validator first, then the generator (only when no alias was supplied), then
/// the registry. Only generated aliases are retried on collision; a
/// caller-supplied alias that is taken is reported straight back.
pub struct LinkService {
    saver: Arc<dyn UrlSaver>,
    generator: Arc<dyn AliasGenerator>,
    policy: SavePolicy,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        saver: Arc<dyn UrlSaver>,
        generator: Arc<dyn AliasGenerator>,
        policy: SavePolicy,
    ) -> Self {
        Self {
            saver,
            generator,
            policy,
        }
    }

    /// Returns the active generation policy.
    pub fn policy(&self) -> SavePolicy {
        self.policy
    }

    /// Validates and stores `url`, under `alias` if given or a generated one otherwise.
    ///
    /// `None` and `Some("")` both mean "generate".
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidUrl`] / [`RegistryError::InvalidAlias`] before storage is touched
    /// - [`RegistryError::AliasExists`] if the supplied alias is taken or reserved by a route
    /// - [`RegistryError::UrlExists`] if duplicate URLs are rejected by the registry
    /// - [`RegistryError::AliasSpaceExhausted`] if every generated candidate collided
    /// - [`RegistryError::StorageFailure`] on persistence errors
    pub async fn save(&self, url: &str, alias: Option<&str>) -> Result<SavedUrl, RegistryError> {
        validate_url(url)?;

        let alias = alias.unwrap_or_default();
        validate_alias(alias)?;

        if alias.is_empty() {
            return self.save_with_generated_alias(url).await;
        }

        if is_reserved_alias(alias) {
            return Err(RegistryError::AliasExists(alias.to_string()));
        }

        let id = self.saver.save(url, alias).await?;

        Ok(SavedUrl {
            id,
            alias: alias.to_string(),
        })
    }

    /// Generates a candidate and saves, regenerating on `AliasExists` up to the policy bound.
    async fn save_with_generated_alias(&self, url: &str) -> Result<SavedUrl, RegistryError> {
        for attempt in 1..=self.policy.max_attempts {
            let alias = self.generator.generate(self.policy.alias_length);

            if is_reserved_alias(&alias) {
                debug!(attempt, alias = %alias, "generated alias is reserved");
                continue;
            }

            match self.saver.save(url, &alias).await {
                Ok(id) => return Ok(SavedUrl { id, alias }),
                Err(RegistryError::AliasExists(_)) => {
                    debug!(attempt, alias = %alias, "generated alias collided");
                }
                Err(e) => return Err(e),
            }
        }

        Err(RegistryError::AliasSpaceExhausted {
            attempts: self.policy.max_attempts,
        })
    }
}
