use super::RawResponse;
use crate::api::FetchError;

pub async fn send(
    _method: &str,
    _path: &str,
    _body: Option<String>,
) -> Result<RawResponse, FetchError> {
    Err(FetchError::Unsupported)
}
