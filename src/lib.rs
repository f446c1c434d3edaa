//! # url-alias
//!
//! A small URL shortener: an alias → URL registry backed by SQLite and served
//! over Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, registry errors and the capability traits
//! - **Application Layer** ([`application`]) - Save flow with collision retries, basic-auth check
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory registries
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Caller-chosen or generated aliases, unique under concurrent writes
//! - Bounded regeneration when a generated alias collides
//! - Optional rejection of URLs that are already stored
//! - Basic auth on write endpoints, request ids in every log line
//!
//! ## Quick Start
//!
//! ```bash
//! export AUTH_USER="myuser"
//! export AUTH_PASSWORD="mypass"
//!
//! # Migrations run on startup
//! cargo run
//!
//! curl -u myuser:mypass -d '{"url":"https://example.com"}' http://localhost:8082/url
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService, SavePolicy};
    pub use crate::domain::entities::{RecordId, SavedUrl, UrlRecord};
    pub use crate::domain::error::RegistryError;
    pub use crate::domain::repositories::{UrlDeleter, UrlGetter, UrlRegistry, UrlSaver};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InMemoryUrlRegistry, SqliteUrlRegistry};
    pub use crate::state::AppState;
}
