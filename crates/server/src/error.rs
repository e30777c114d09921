//! Unified error handling at the HTTP boundary.
//!
//! Provides a unified `AppError` type that converts every service-layer
//! failure into a status code plus a JSON `{message}` body. All route
//! handlers return `Result<T, AppError>`; nothing propagates past this
//! boundary.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::{AuthError, CatalogError};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Catalog operation failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server-side failures are logged with their detail; the client only
        // ever sees a generic message for them.
        if matches!(
            self,
            Self::Internal(_)
                | Self::Catalog(CatalogError::Storage(_))
                | Self::Auth(AuthError::PasswordHash)
        ) {
            tracing::error!(error = %self, "request failed");
        }

        let status = match &self {
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Auth(AuthError::PasswordHash) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Catalog(err) => match err {
                CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                CatalogError::DuplicateId(_) => StatusCode::CONFLICT,
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            Self::Auth(AuthError::InvalidCredentials) => "Invalid username or password".to_owned(),
            Self::Catalog(err) => match err {
                CatalogError::InvalidInput(e) => format!("Invalid product data: {e}"),
                CatalogError::DuplicateId(_) => "Product ID already exists".to_owned(),
                CatalogError::NotFound(_) => "Product not found".to_owned(),
                CatalogError::Storage(_) => "Internal server error".to_owned(),
            },
            Self::BadRequest(msg) => msg.clone(),
            Self::Auth(AuthError::PasswordHash) | Self::Internal(_) => {
                "Internal server error".to_owned()
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
