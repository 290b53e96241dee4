//! Browser-side client for the portfolio `/api/*` proxy routes.
//!
//! Requests go through `window.fetch` on wasm32. Native builds compile the same API against a
//! stub transport that reports [`FetchError::Unsupported`], which keeps the desktop crates
//! testable on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod api;
mod interop;

pub use api::{ask_assistant, fetch_blogs, fetch_projects, FetchError};
