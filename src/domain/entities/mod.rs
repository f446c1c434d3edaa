//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored alias → URL mapping
//! - [`SavedUrl`] - What a successful save hands back to the caller

pub mod url_record;

pub use url_record::{RecordId, SavedUrl, UrlRecord};
