//! Single-shot upstream calls. No retries and no timeouts.

use axum::{body::Bytes, http::StatusCode};
use portfolio_contract::{UpstreamChatQuery, UpstreamChatResponse};
use serde::de::IgnoredAny;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ways an upstream call can fail.
pub enum UpstreamFailure {
    /// The request could not be sent or the body could not be read.
    #[error("upstream unreachable: {0}")]
    Network(#[from] reqwest::Error),
    /// The upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),
    /// The upstream body is not valid JSON.
    #[error("upstream returned a malformed body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Fetches `url` and returns the raw JSON body, verified to parse but otherwise untouched.
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Bytes, UpstreamFailure> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamFailure::Status(status));
    }
    let body = response.bytes().await?;
    serde_json::from_slice::<IgnoredAny>(&body)?;
    Ok(body)
}

/// Sends `question` to the assistant RPC endpoint and resolves the answer text.
///
/// Errors are returned as display text for the chat route's `Error: ` body.
pub async fn query_assistant(
    client: &reqwest::Client,
    url: &str,
    question: String,
) -> Result<String, String> {
    let response = client
        .post(url)
        .json(&UpstreamChatQuery { question })
        .send()
        .await
        .map_err(|err| UpstreamFailure::Network(err).to_string())?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|err| UpstreamFailure::Network(err).to_string())?;

    let parsed = match serde_json::from_slice::<UpstreamChatResponse>(&body) {
        Ok(parsed) => parsed,
        Err(err) if status.is_success() => return Err(UpstreamFailure::Malformed(err).to_string()),
        Err(_) => return Err(UpstreamFailure::Status(status).to_string()),
    };
    if !status.is_success() && parsed.error.is_none() {
        return Err(UpstreamFailure::Status(status).to_string());
    }
    parsed.into_answer()
}
