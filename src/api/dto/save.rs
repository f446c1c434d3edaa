//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};

use super::response::ApiResponse;

/// Request to register a URL, optionally under a chosen alias.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    /// Target URL. A missing field is treated as empty and rejected by validation.
    #[serde(default)]
    pub url: String,

    /// Requested alias. Missing, `null` and `""` all mean "generate one".
    #[serde(default)]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Returns the requested alias, or `None` when one should be generated.
    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

/// Successful save: `{"status": "OK", "alias": "..."}`.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: ApiResponse,

    pub alias: String,
}

impl SaveResponse {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            response: ApiResponse::ok(),
            alias: alias.into(),
        }
    }
}
