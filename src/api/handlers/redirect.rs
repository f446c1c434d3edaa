//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::{error, info};

use crate::domain::error::RegistryError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns `307 Temporary Redirect` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist, 500 on storage failure.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.url_getter.get(&alias).await {
        Ok(url) => {
            info!(%alias, %url, "got url");
            Ok(Redirect::temporary(&url))
        }
        Err(err @ RegistryError::NotFound(_)) => {
            info!(%alias, "url not found");
            Err(err.into())
        }
        Err(err) => {
            error!(error = ?err, %alias, "failed to get url");
            Err(AppError::internal("internal error"))
        }
    }
}
