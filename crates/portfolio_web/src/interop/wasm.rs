use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::RawResponse;
use crate::api::FetchError;

fn js_error(err: JsValue) -> FetchError {
    FetchError::Network(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

pub async fn send(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<RawResponse, FetchError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body.as_deref() {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(path, &init).map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window()
        .ok_or_else(|| FetchError::Network("window unavailable".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse {
        status: response.status(),
        text,
    })
}
