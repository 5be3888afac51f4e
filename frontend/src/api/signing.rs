//! Signed request headers.

use crate::auth;
use crate::config::{APP_KEY, APP_SECRET, PLATFORM};
use crate::fb_api::FbApi;
use crate::ua;
use js_sys::{Function, Promise, Reflect};
use shared::sign::{signature, SignFields};
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// The mini-program container exposes its own `fb` global with a token
/// getter distinct from the webview bridge.
async fn miniprogram_user_token() -> Option<String> {
    let window = window()?;
    let fb = Reflect::get(&window, &JsValue::from_str("fb")).ok()?;
    if fb.is_undefined() {
        return None;
    }
    let getter: Function = Reflect::get(&fb, &JsValue::from_str("getUserToken"))
        .ok()?
        .dyn_into()
        .ok()?;
    let promise: Promise = getter.call0(&fb).ok()?.dyn_into().ok()?;
    let result = JsFuture::from(promise).await.ok()?;
    Reflect::get(&result, &JsValue::from_str("token"))
        .ok()?
        .as_string()
}

/// Resolves the bearer token for the current environment. Never fails:
/// a bridge error yields the empty string and the server stays the
/// authority on authentication.
pub async fn resolve_user_token() -> String {
    if ua::in_miniprogram() {
        miniprogram_user_token().await.unwrap_or_default()
    } else if ua::in_fanbook() {
        FbApi::get_user_token().await
    } else {
        auth::get_token().unwrap_or_default()
    }
}

/// Builds the full signed header set for a request, `body` being the
/// JSON-serialized payload when there is one.
pub async fn signature_headers(body: Option<&str>) -> Vec<(&'static str, String)> {
    let token = resolve_user_token().await;
    let nonce = Uuid::new_v4().to_string();
    let timestamp = (js_sys::Date::now() as u64).to_string();
    let request_body = body.unwrap_or("");

    let sig = signature(
        &SignFields {
            nonce: &nonce,
            timestamp: &timestamp,
            authorization: &token,
            app_key: APP_KEY,
            platform: PLATFORM,
            request_body,
        },
        APP_SECRET,
    );

    let (device_header, device_value) = ua::device_type_header();
    vec![
        ("Content-Type", "application/json".to_string()),
        ("Nonce", nonce),
        ("Timestamp", timestamp),
        ("Authorization", token),
        ("AppKey", APP_KEY.to_string()),
        ("Platform", PLATFORM.to_string()),
        ("signature", sig),
        (device_header, device_value.to_string()),
    ]
}
