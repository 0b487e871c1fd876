//! Browser transport built on `window.fetch`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::request::{ApiRequest, ApiResponse};
use super::Transport;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.path, &init).map_err(ApiError::from_js)?;
        if request.body.is_some() {
            req.headers()
                .set("Content-Type", "application/json")
                .map_err(ApiError::from_js)?;
        }

        let value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(ApiError::from_js)?;
        let response: Response = value.dyn_into().map_err(ApiError::from_js)?;

        let text = JsFuture::from(response.text().map_err(ApiError::from_js)?)
            .await
            .map_err(ApiError::from_js)?;

        Ok(ApiResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
