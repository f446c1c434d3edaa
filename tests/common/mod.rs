#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use axum_test::TestServer;
use base64::Engine as _;
use std::sync::Arc;
use std::time::Duration;
use url_alias::application::services::{AuthService, SavePolicy};
use url_alias::domain::error::RegistryError;
use url_alias::domain::repositories::{StorageHealth, UrlDeleter, UrlGetter};
use url_alias::infrastructure::persistence::InMemoryUrlRegistry;
use url_alias::routes::router;
use url_alias::state::AppState;
use url_alias::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};

pub const USER: &str = "myuser";
pub const PASSWORD: &str = "mypass";

/// Generator returning a fixed sequence of aliases, then repeating the last one.
pub struct ScriptedGenerator {
    aliases: std::sync::Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(aliases: &[&str]) -> Self {
        let mut aliases: Vec<String> = aliases.iter().map(|a| a.to_string()).collect();
        aliases.reverse();
        Self {
            aliases: std::sync::Mutex::new(aliases),
        }
    }
}

impl AliasGenerator for ScriptedGenerator {
    fn generate(&self, _length: usize) -> String {
        let mut aliases = self.aliases.lock().unwrap();
        if aliases.len() > 1 {
            aliases.pop().unwrap()
        } else {
            aliases[0].clone()
        }
    }
}

/// Store whose every read, delete and ping fails with a storage error.
pub struct FailingStore;

#[async_trait]
impl UrlGetter for FailingStore {
    async fn get(&self, _alias: &str) -> Result<String, RegistryError> {
        Err(RegistryError::storage("database is locked"))
    }
}

#[async_trait]
impl UrlDeleter for FailingStore {
    async fn delete(&self, _alias: &str) -> Result<(), RegistryError> {
        Err(RegistryError::storage("database is locked"))
    }
}

#[async_trait]
impl StorageHealth for FailingStore {
    async fn ping(&self) -> Result<(), RegistryError> {
        Err(RegistryError::storage("connection refused"))
    }
}

pub fn create_test_state_with(
    registry: Arc<InMemoryUrlRegistry>,
    generator: Arc<dyn AliasGenerator>,
) -> AppState {
    AppState::from_registry(
        registry,
        generator,
        SavePolicy::default(),
        AuthService::new(USER, PASSWORD).unwrap(),
    )
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRegistry>) {
    let registry = Arc::new(InMemoryUrlRegistry::new());
    let state = create_test_state_with(registry.clone(), Arc::new(RandomAliasGenerator::new()));
    (state, registry)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state, Duration::from_secs(4))).unwrap()
}

pub fn basic_auth(user: &str, password: &str) -> HeaderValue {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{password}"));
    HeaderValue::from_str(&format!("Basic {encoded}")).unwrap()
}

pub fn valid_auth() -> HeaderValue {
    basic_auth(USER, PASSWORD)
}
