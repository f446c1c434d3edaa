//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, SavePolicy};
use crate::domain::repositories::{StorageHealth, UrlDeleter, UrlGetter, UrlRegistry};
use crate::utils::alias_generator::AliasGenerator;

/// Services and registry capabilities available to every handler.
///
/// Cheap to clone: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub url_getter: Arc<dyn UrlGetter>,
    pub url_deleter: Arc<dyn UrlDeleter>,
    pub storage_health: Arc<dyn StorageHealth>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires every capability to one registry instance.
    pub fn from_registry<R>(
        registry: Arc<R>,
        generator: Arc<dyn AliasGenerator>,
        policy: SavePolicy,
        auth_service: AuthService,
    ) -> Self
    where
        R: UrlRegistry + 'static,
    {
        let link_service = LinkService::new(registry.clone(), generator, policy);

        Self {
            link_service: Arc::new(link_service),
            url_getter: registry.clone(),
            url_deleter: registry.clone(),
            storage_health: registry,
            auth_service: Arc::new(auth_service),
        }
    }
}
