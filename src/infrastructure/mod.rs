//! Infrastructure layer: concrete registry implementations.
//!
//! - [`persistence`] - SQLite and in-memory registries

pub mod persistence;
