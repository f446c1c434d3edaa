//! Domain layer: entities, the registry error taxonomy and capability traits.
//!
//! Nothing in here depends on HTTP, configuration or logging. The registry
//! traits in [`repositories`] are implemented in `crate::infrastructure::persistence`.
//!
//! - [`entities`] - Core data structures
//! - [`error`] - [`error::RegistryError`], the error kinds every registry operation returns
//! - [`repositories`] - `UrlSaver` / `UrlGetter` / `UrlDeleter` capability traits

pub mod entities;
pub mod error;
pub mod repositories;
