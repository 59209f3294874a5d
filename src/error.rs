use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{ERR_INVALID_CREDENTIALS, ERR_RECORD_NOT_FOUND};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The storage engine rejected the statement (constraint violation,
    /// bad value). Surfaced verbatim with a 4xx, matching how the original
    /// gateway passed the storage service's message through.
    #[error("{0}")]
    Storage(String),

    /// Connectivity or other unexpected sqlx failure
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Login email missing or password mismatch. Both collapse into the
    /// same response so callers cannot enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Profile fetch by an id with no matching row
    #[error("record not found")]
    RecordNotFound,
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => AppError::Storage(db.message().to_string()),
            other => AppError::Database(other),
        }
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Storage(ref msg) => {
                tracing::warn!("Storage rejection: {}", msg);
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, ERR_INVALID_CREDENTIALS),
            AppError::RecordNotFound => (StatusCode::BAD_REQUEST, ERR_RECORD_NOT_FOUND),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
