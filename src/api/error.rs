//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed a field check.
    #[error("{0}")]
    BadRequest(String),

    #[error("Note not found")]
    NotFound,

    /// `message` is `None` when failure details are redacted.
    #[error("Internal server error")]
    Internal { message: Option<String> },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": "Note not found" }),
            ),
            ApiError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": "Internal server error",
                    "message": message,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
