use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use portfolio_contract::validate_chat_request;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::{ApiError, PLAIN_TEXT_UTF8},
    upstream::query_assistant,
    ApiState,
};

/// `POST /api/chat`: validates the last message and relays the assistant's plain-text answer.
pub async fn ask_assistant(State(state): State<ApiState>, body: Bytes) -> Result<Response, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|_| ApiError::ChatMalformed)?;
    let question = validate_chat_request(&payload)?;
    debug!(chars = question.chars().count(), "forwarding chat question");

    let url = state.upstream.chat_rpc_url.as_str();
    match query_assistant(&state.client, url, question).await {
        Ok(answer) => Ok(([(header::CONTENT_TYPE, PLAIN_TEXT_UTF8)], answer).into_response()),
        Err(message) => {
            warn!(upstream = url, error = %message, "chat relay failed");
            Err(ApiError::ChatUpstream(message))
        }
    }
}
