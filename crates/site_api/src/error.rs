//! Proxy failure kinds and their wire representation.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use portfolio_contract::{ChatValidationError, ErrorEnvelope};
use thiserror::Error;

/// Error text returned when the blog list cannot be relayed.
pub const BLOGS_FAILURE: &str = "Failed to fetch blogs";
/// Error text returned when the project upstream answers with a non-2xx status.
pub const PROJECTS_FAILURE: &str = "Failed to fetch projects from external API";
/// Error text returned for any other project route failure.
pub const INTERNAL_FAILURE: &str = "Internal Server Error";

/// Content type of chat route responses.
pub const PLAIN_TEXT_UTF8: &str = "text/plain; charset=utf-8";

#[derive(Debug, Error)]
/// Failures surfaced by the proxy routes. Each maps to exactly one response shape.
pub enum ApiError {
    /// The blog upstream failed in any way.
    #[error("failed to fetch blogs")]
    Blogs,
    /// The project upstream answered with a non-success status, which is relayed.
    #[error("project upstream returned status {0}")]
    ProjectsStatus(StatusCode),
    /// The project upstream was unreachable or returned an unusable body.
    #[error("project upstream unavailable")]
    ProjectsInternal,
    /// The chat request was rejected before any upstream call.
    #[error(transparent)]
    ChatInvalid(#[from] ChatValidationError),
    /// The chat body was not JSON.
    #[error("request body must be JSON")]
    ChatMalformed,
    /// The assistant reported an error or could not be reached.
    #[error("{0}")]
    ChatUpstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Blogs => envelope(StatusCode::INTERNAL_SERVER_ERROR, BLOGS_FAILURE),
            Self::ProjectsStatus(status) => envelope(status, PROJECTS_FAILURE),
            Self::ProjectsInternal => envelope(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_FAILURE),
            Self::ChatInvalid(err) => envelope(StatusCode::BAD_REQUEST, err.to_string()),
            Self::ChatMalformed => envelope(StatusCode::BAD_REQUEST, "request body must be JSON"),
            Self::ChatUpstream(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, PLAIN_TEXT_UTF8)],
                format!("Error: {message}"),
            )
                .into_response(),
        }
    }
}

fn envelope(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorEnvelope::new(message))).into_response()
}
