//! Error types and mappings onto HTTP status codes and response bodies.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use minishelf_catalog::SaveError;
use serde::Serialize;
use thiserror::Error;

/// Admin API error type.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Invalid submission data.
    #[error("{0}")]
    BadRequest(String),

    /// The derived identifier or a target filename is already taken.
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure while writing the store.
    #[error("{0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<SaveError> for AdminError {
    fn from(err: SaveError) -> Self {
        match err {
            SaveError::Validation(msg) => Self::BadRequest(msg),
            SaveError::Conflict(msg) => Self::Conflict(msg),
            SaveError::Io(e) => Self::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            AdminError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AdminError::Conflict(_) => StatusCode::CONFLICT,
            AdminError::Internal(msg) => {
                log::error!("store write failed: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
