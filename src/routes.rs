//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Redirect to the stored URL (public)
//! - `GET    /health`       - Storage health check (public)
//! - `POST   /url`          - Register a URL (basic auth)
//! - `DELETE /url/{alias}`  - Remove an alias (basic auth)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` set (UUID) when absent and echoed on the response
//! - **Tracing** - Structured request/response logging with the request id
//! - **Timeout** - Requests exceeding the configured timeout get `408`
//! - **Authentication** - Basic auth on write routes
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with all routes and middleware, without path normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(tracing::layer())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
}

/// Constructs the application router with trailing slashes trimmed before routing.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
