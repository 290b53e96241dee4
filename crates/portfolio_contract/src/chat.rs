//! Chat assistant request/response contracts and input validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Maximum accepted length, in characters, of the question sent to the assistant.
pub const MAX_CHAT_MESSAGE_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One chat transcript entry as posted by the browser.
pub struct ChatMessage {
    /// `"user"` or `"assistant"`. The proxy ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Builds a user-authored message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            content: content.into(),
        }
    }

    /// Builds an assistant-authored message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Some("assistant".to_string()),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Body of `POST /api/chat`.
pub struct ChatRequest {
    /// Full transcript; only the last entry is forwarded upstream.
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload forwarded to the upstream `query_enhanced` endpoint.
pub struct UpstreamChatQuery {
    /// Question text taken from the last chat message.
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Error object reported by the upstream assistant.
pub struct UpstreamChatError {
    /// Upstream-provided message.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Upstream assistant response: either `{ "result": ... }` or `{ "error": { "message": ... } }`.
pub struct UpstreamChatResponse {
    /// Answer text on success.
    #[serde(default)]
    pub result: Option<Value>,
    /// Error object on failure.
    #[serde(default)]
    pub error: Option<UpstreamChatError>,
}

impl UpstreamChatResponse {
    /// Resolves the response into the answer text or an error message.
    ///
    /// An `error` object wins over `result`. A missing or non-string `result` is reported as an
    /// error instead of being forwarded.
    pub fn into_answer(self) -> Result<String, String> {
        if let Some(error) = self.error {
            let message = error.message.trim();
            return Err(if message.is_empty() {
                "upstream reported an error".to_string()
            } else {
                message.to_string()
            });
        }
        match self.result {
            Some(Value::String(answer)) => Ok(answer),
            Some(_) => Err("upstream result is not a string".to_string()),
            None => Err("upstream response missing result".to_string()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a chat request is rejected before reaching the upstream assistant.
pub enum ChatValidationError {
    /// Body is not an object with a non-empty `messages` array.
    #[error("messages must be a non-empty array")]
    MissingMessages,
    /// The last message has no string `content`.
    #[error("message content must be a string")]
    ContentNotString,
    /// The last message content is empty.
    #[error("message content must not be empty")]
    EmptyContent,
    /// The last message content is longer than [`MAX_CHAT_MESSAGE_CHARS`].
    #[error("message content must be at most 500 characters")]
    ContentTooLong,
}

/// Validates a raw chat request body and returns the question to forward.
///
/// Only the last entry of `messages` is inspected. Length is measured in characters, not bytes.
pub fn validate_chat_request(body: &Value) -> Result<String, ChatValidationError> {
    let last = body
        .get("messages")
        .and_then(Value::as_array)
        .and_then(|messages| messages.last())
        .ok_or(ChatValidationError::MissingMessages)?;
    let content = last
        .get("content")
        .and_then(Value::as_str)
        .ok_or(ChatValidationError::ContentNotString)?;
    validate_question(content)?;
    Ok(content.to_string())
}

/// Validates a single question string against the chat input rules.
pub fn validate_question(content: &str) -> Result<(), ChatValidationError> {
    if content.is_empty() {
        return Err(ChatValidationError::EmptyContent);
    }
    if content.chars().count() > MAX_CHAT_MESSAGE_CHARS {
        return Err(ChatValidationError::ContentTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn last_message_content_is_forwarded() {
        let body = json!({
            "messages": [
                { "role": "user", "content": "first" },
                { "role": "assistant", "content": "reply" },
                { "role": "user", "content": "hello" }
            ]
        });
        assert_eq!(validate_chat_request(&body), Ok("hello".to_string()));
    }

    #[test]
    fn rejects_empty_non_string_and_oversized_content() {
        assert_eq!(
            validate_chat_request(&json!({ "messages": [{ "content": "" }] })),
            Err(ChatValidationError::EmptyContent)
        );
        assert_eq!(
            validate_chat_request(&json!({ "messages": [{ "content": 42 }] })),
            Err(ChatValidationError::ContentNotString)
        );
        assert_eq!(
            validate_chat_request(&json!({ "messages": [{ "content": "x".repeat(501) }] })),
            Err(ChatValidationError::ContentTooLong)
        );
        assert_eq!(
            validate_chat_request(&json!({ "messages": [] })),
            Err(ChatValidationError::MissingMessages)
        );
        assert_eq!(
            validate_chat_request(&json!({ "question": "hi" })),
            Err(ChatValidationError::MissingMessages)
        );
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        let at_limit = "é".repeat(MAX_CHAT_MESSAGE_CHARS);
        assert!(validate_question(&at_limit).is_ok());
        assert_eq!(
            validate_question(&"é".repeat(MAX_CHAT_MESSAGE_CHARS + 1)),
            Err(ChatValidationError::ContentTooLong)
        );
    }

    #[test]
    fn upstream_response_resolution() {
        let ok: UpstreamChatResponse = serde_json::from_value(json!({ "result": "hi" })).unwrap();
        assert_eq!(ok.into_answer(), Ok("hi".to_string()));

        let failed: UpstreamChatResponse =
            serde_json::from_value(json!({ "error": { "message": "quota" } })).unwrap();
        assert_eq!(failed.into_answer(), Err("quota".to_string()));

        let missing: UpstreamChatResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(
            missing.into_answer(),
            Err("upstream response missing result".to_string())
        );
    }
}
