use axum::{extract::State, response::Response};
use tracing::warn;

use super::json_passthrough;
use crate::{
    error::ApiError,
    upstream::{fetch_json, UpstreamFailure},
    ApiState,
};

/// `GET /api/projects`: relays the upstream project list verbatim.
///
/// A non-2xx upstream status is passed through with the project error envelope; anything else
/// becomes a 500.
pub async fn list_projects(State(state): State<ApiState>) -> Result<Response, ApiError> {
    let url = state.upstream.projects_url.as_str();
    match fetch_json(&state.client, url).await {
        Ok(body) => Ok(json_passthrough(body)),
        Err(UpstreamFailure::Status(status)) => {
            warn!(upstream = url, %status, "project list upstream rejected request");
            Err(ApiError::ProjectsStatus(status))
        }
        Err(err) => {
            warn!(upstream = url, error = %err, "project list relay failed");
            Err(ApiError::ProjectsInternal)
        }
    }
}
