//! Application layer services.
//!
//! Services sit between the HTTP handlers and the registry traits.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Validation, alias generation and save retries
//! - [`services::auth_service::AuthService`] - Basic-auth credential check

pub mod services;
