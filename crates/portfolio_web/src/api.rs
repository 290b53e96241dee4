use portfolio_contract::{
    extract_list, BlogPost, ChatMessage, ChatRequest, ErrorEnvelope, Project, BLOGS_ROUTE,
    CHAT_ROUTE, PROJECTS_ROUTE,
};
use serde_json::Value;
use thiserror::Error;

use crate::interop::{self, RawResponse};

const BLOG_LIST_KEYS: &[&str] = &["posts", "blogs", "data", "items"];
const PROJECT_LIST_KEYS: &[&str] = &["projects", "repos", "data", "items"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures reported to the window content views.
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The proxy answered with a non-2xx status.
    #[error("{message} ({status})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error text from the envelope or the raw body.
        message: String,
    },
    /// The body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// No browser transport is available in this build.
    #[error("requests are only available in the browser")]
    Unsupported,
}

/// Loads the blog list through `GET /api/blogs`.
pub async fn fetch_blogs() -> Result<Vec<BlogPost>, FetchError> {
    let payload = get_json(BLOGS_ROUTE).await?;
    Ok(extract_list(&payload, BLOG_LIST_KEYS))
}

/// Loads the project list through `GET /api/projects`.
pub async fn fetch_projects() -> Result<Vec<Project>, FetchError> {
    let payload = get_json(PROJECTS_ROUTE).await?;
    Ok(extract_list(&payload, PROJECT_LIST_KEYS))
}

/// Posts the transcript to `POST /api/chat` and returns the plain-text answer.
pub async fn ask_assistant(messages: Vec<ChatMessage>) -> Result<String, FetchError> {
    let body = serde_json::to_string(&ChatRequest { messages })
        .map_err(|err| FetchError::Decode(err.to_string()))?;
    let raw = interop::post_json(CHAT_ROUTE, body).await?;
    if raw.is_success() {
        Ok(raw.text)
    } else {
        Err(status_error(raw))
    }
}

async fn get_json(path: &str) -> Result<Value, FetchError> {
    let raw = interop::get(path).await?;
    if !raw.is_success() {
        return Err(status_error(raw));
    }
    serde_json::from_str(&raw.text).map_err(|err| FetchError::Decode(err.to_string()))
}

fn status_error(raw: RawResponse) -> FetchError {
    let message = match serde_json::from_str::<ErrorEnvelope>(&raw.text) {
        Ok(envelope) => envelope.error,
        Err(_) => raw.text.trim().to_string(),
    };
    FetchError::Status {
        status: raw.status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_errors_prefer_the_json_envelope() {
        let err = status_error(RawResponse {
            status: 503,
            text: r#"{"error":"Failed to fetch projects from external API"}"#.to_string(),
        });
        assert_eq!(
            err,
            FetchError::Status {
                status: 503,
                message: "Failed to fetch projects from external API".to_string(),
            }
        );
    }

    #[test]
    fn status_errors_fall_back_to_plain_text() {
        let err = status_error(RawResponse {
            status: 500,
            text: "Error: quota exceeded\n".to_string(),
        });
        assert_eq!(err.to_string(), "Error: quota exceeded (500)");
    }
}
