use axum::{extract::State, response::Response};
use tracing::warn;

use super::json_passthrough;
use crate::{error::ApiError, upstream::fetch_json, ApiState};

/// `GET /api/blogs`: relays the upstream blog list verbatim.
pub async fn list_blogs(State(state): State<ApiState>) -> Result<Response, ApiError> {
    let url = state.upstream.blogs_url.as_str();
    match fetch_json(&state.client, url).await {
        Ok(body) => Ok(json_passthrough(body)),
        Err(err) => {
            warn!(upstream = url, error = %err, "blog list relay failed");
            Err(ApiError::Blogs)
        }
    }
}
