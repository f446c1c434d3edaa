//! URL record entity: the persisted alias → URL mapping.

/// Storage-assigned record identifier.
///
/// Monotonically increasing and never reused, even after the record is deleted.
pub type RecordId = i64;

/// A stored alias → URL mapping.
///
/// `id` is only a storage key. Lookups always go through `alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: RecordId,
    pub alias: String,
    pub url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: RecordId, alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            url: url.into(),
        }
    }
}

/// Result of a successful save: the id the store assigned and the alias in use.
///
/// The alias is either the caller's or a freshly generated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedUrl {
    pub id: RecordId,
    pub alias: String,
}
