//! API route configuration.
//!
//! Write endpoints require basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Routes that modify the registry.
///
/// # Endpoints
///
/// - `POST   /url`          - Register a URL (alias optional)
/// - `DELETE /url/{alias}`  - Remove an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
