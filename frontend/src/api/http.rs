//! Signed GET/POST over the uniform response envelope.

use crate::api::signing::signature_headers;
use crate::config::get_api_base_url;
use crate::fb_api::FbApi;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::envelope::{error_policy, unwrap_envelope, ApiError, HttpResp, CODE_NOT_WHITELISTED};
use web_sys::window;

/// Where sentinel error codes send the user.
const FALLBACK_ROUTE: &str = "/activity";

fn hard_redirect(path: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("redirect to {path} failed: {e:?}");
        }
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope: HttpResp<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if envelope.code != 0 {
        let policy = error_policy(envelope.code);
        if policy.toast {
            if envelope.code == CODE_NOT_WHITELISTED && envelope.msg.is_empty() {
                FbApi::toast("非白名单用户");
            } else {
                FbApi::toast(&envelope.msg);
            }
        }
        if policy.redirect {
            hard_redirect(FALLBACK_ROUTE);
        }
    }

    unwrap_envelope(envelope)
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let headers = signature_headers(None).await;
    let mut request = Request::get(&format!("{}{}", get_api_base_url(), path));
    for (name, value) in &headers {
        request = request.header(name, value);
    }
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle_response(response).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let body_json =
        serde_json::to_string(body).map_err(|e| ApiError::Decode(format!("serialize request: {e}")))?;
    let headers = signature_headers(Some(&body_json)).await;

    let mut request = Request::post(&format!("{}{}", get_api_base_url(), path));
    for (name, value) in &headers {
        request = request.header(name, value);
    }
    let response = request
        .body(body_json)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle_response(response).await
}
