//! `GET /`: API documentation, as HTML for browsers and plain text otherwise.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use super::{ApiError, AppState};

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ApiError> {
    let wants_html = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"));

    let rendered = if wants_html {
        state.docs.html().await.map(|html| Html(html).into_response())
    } else {
        state.docs.markdown().await.map(|text| {
            ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text).into_response()
        })
    };

    rendered.map_err(|e| {
        error!(path = %state.docs.readme_path().display(), error = %e, "Failed to read API documentation");
        ApiError::Internal {
            message: (!state.production).then(|| e.to_string()),
        }
    })
}
