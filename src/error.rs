//! HTTP-facing error type and the mapping from registry errors.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::dto::response::ApiResponse;
use crate::domain::error::RegistryError;

/// Realm advertised in `WWW-Authenticate` on 401 responses.
pub const AUTH_REALM: &str = "url-alias";

/// Error returned by handlers and middleware.
///
/// Rendered as `{"status": "Error", "error": "<message>"}` with a matching
/// status code. Messages are shown to clients as-is, so they never carry
/// internal details.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::InvalidUrl(_) => AppError::bad_request("field URL is not a valid URL"),
            RegistryError::InvalidAlias(_) => {
                AppError::bad_request("alias length must be between 3 and 20 characters")
            }
            RegistryError::AliasExists(_) => AppError::conflict("alias already exists"),
            RegistryError::UrlExists(_) => AppError::conflict("url already exists"),
            RegistryError::NotFound(_) => AppError::not_found("not found"),
            RegistryError::AliasSpaceExhausted { .. } | RegistryError::StorageFailure(_) => {
                AppError::internal("internal error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let unauthorized = matches!(self, AppError::Unauthorized { .. });

        let mut response = (status, Json(ApiResponse::error(self.to_string()))).into_response();

        if unauthorized {
            let challenge = format!("Basic realm=\"{AUTH_REALM}\"");
            if let Ok(value) = challenge.parse() {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
        }

        response
    }
}
