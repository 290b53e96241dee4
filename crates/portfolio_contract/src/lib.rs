//! Wire contracts shared by the browser desktop and the `site_api` proxy service.
//!
//! This crate owns the JSON shapes exchanged over `/api/*`, the uniform error envelope, and the
//! chat input validator. It has no browser or server dependencies so both sides compile it as-is.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod chat;
pub mod content;

use serde::{Deserialize, Serialize};

pub use chat::{
    validate_chat_request, ChatMessage, ChatRequest, ChatValidationError, UpstreamChatError,
    UpstreamChatQuery, UpstreamChatResponse, MAX_CHAT_MESSAGE_CHARS,
};
pub use content::{extract_list, BlogPost, Project};

/// Route path for the blog list proxy.
pub const BLOGS_ROUTE: &str = "/api/blogs";
/// Route path for the project list proxy.
pub const PROJECTS_ROUTE: &str = "/api/projects";
/// Route path for the chat assistant proxy.
pub const CHAT_ROUTE: &str = "/api/chat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Uniform `{ "error": string }` body returned by the proxy routes on failure.
pub struct ErrorEnvelope {
    /// Human-readable failure summary.
    pub error: String,
}

impl ErrorEnvelope {
    /// Builds an envelope from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
