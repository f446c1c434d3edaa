//! Handler for removing an alias.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::api::dto::response::ApiResponse;
use crate::domain::error::RegistryError;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the record stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (basic auth)
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist, 500 on storage failure.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse>, AppError> {
    match state.url_deleter.delete(&alias).await {
        Ok(()) => {
            info!(%alias, "url deleted");
            Ok(Json(ApiResponse::ok()))
        }
        Err(err @ RegistryError::NotFound(_)) => {
            info!(%alias, "url not found");
            Err(err.into())
        }
        Err(err) => {
            error!(error = ?err, %alias, "failed to delete url");
            Err(AppError::internal("internal error"))
        }
    }
}
