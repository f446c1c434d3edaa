//! Helpers used across the crate.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`validator`] - URL and alias checks run before the registry
//! - [`db_error`] - SQLx error classification

pub mod alias_generator;
pub mod db_error;
pub mod validator;
