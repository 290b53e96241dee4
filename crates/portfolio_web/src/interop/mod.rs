//! Transport routing between the wasm `fetch` bridge and the native stub.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

use crate::api::FetchError;

/// Status code and text body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub text: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub async fn get(path: &str) -> Result<RawResponse, FetchError> {
    imp::send("GET", path, None).await
}

pub async fn post_json(path: &str, body: String) -> Result<RawResponse, FetchError> {
    imp::send("POST", path, Some(body)).await
}
