//! Error kinds returned by the validator, the registry and the save flow.
//!
//! The registry never logs. It hands one of these back and lets the caller
//! decide what to log and what to show; see [`crate::error::AppError`] for the
//! HTTP mapping.

/// Boxed underlying storage error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every way a registry operation (or the validation in front of it) can fail.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The URL is empty, too long, or not an absolute URL with scheme and host.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A caller-supplied alias is outside the allowed length range.
    #[error("invalid alias: {0}")]
    InvalidAlias(String),

    /// The alias is already held by a live record.
    #[error("alias already exists: {0}")]
    AliasExists(String),

    /// The URL is already stored and duplicate URLs are rejected.
    #[error("url already exists: {0}")]
    UrlExists(String),

    /// No live record has this alias.
    #[error("alias not found: {0}")]
    NotFound(String),

    /// Every generated candidate collided with an existing alias.
    #[error("no free alias after {attempts} attempts")]
    AliasSpaceExhausted { attempts: usize },

    /// Any other persistence error (I/O, connectivity, corruption).
    #[error("storage failure: {0}")]
    StorageFailure(#[source] BoxError),
}

impl RegistryError {
    /// Wraps an arbitrary persistence error as [`RegistryError::StorageFailure`].
    pub fn storage(err: impl Into<BoxError>) -> Self {
        Self::StorageFailure(err.into())
    }

    /// Returns true for errors caused by the caller's input rather than the system.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::StorageFailure(_) | Self::AliasSpaceExhausted { .. }
        )
    }
}
