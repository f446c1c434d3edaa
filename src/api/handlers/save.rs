//! Handler for registering a URL under an alias.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info};

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under the requested alias, or under a generated one.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "docs" }
/// ```
///
/// `alias` may be omitted, `null` or `""` to have one generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "docs" }
/// ```
///
/// # Errors
///
/// - **400**: undecodable body, invalid URL, alias length out of range
/// - **409**: alias already exists, or URL already exists when duplicates are rejected
/// - **500**: storage failure or no free alias found
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        info!(error = %rejection, "failed to decode request body");
        AppError::bad_request("failed to decode request")
    })?;

    match state
        .link_service
        .save(&request.url, request.requested_alias())
        .await
    {
        Ok(saved) => {
            info!(id = saved.id, alias = %saved.alias, "url added");
            Ok(Json(SaveResponse::new(saved.alias)))
        }
        Err(err) if err.is_user_error() => {
            info!(error = %err, url = %request.url, "url rejected");
            Err(err.into())
        }
        Err(err) => {
            error!(error = ?err, url = %request.url, "failed to add url");
            Err(AppError::internal("failed to add url"))
        }
    }
}
