//! Cookie-backed session token and URL query helpers.

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, UrlSearchParams};

const TOKEN_COOKIE: &str = "token";

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

pub fn get_cookie(name: &str) -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    for pair in cookies.split(';') {
        if let Some((key, value)) = pair.trim().split_once('=') {
            if key == name {
                return Some(value.to_string());
            }
        }
    }
    None
}

pub fn set_cookie(name: &str, value: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{name}={value}; path=/"));
    }
}

pub fn get_token() -> Option<String> {
    get_cookie(TOKEN_COOKIE).filter(|t| !t.is_empty())
}

pub fn set_token(token: &str) {
    set_cookie(TOKEN_COOKIE, token);
}

pub fn get_url_parameter(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key)
}

/// Invite code parameter threaded into the install fallback payload.
pub fn get_ic_from_url() -> Option<String> {
    get_url_parameter("ic")
}

/// The preview-mode parameter; `fbpvm` is the short alias the share links
/// use for the same payload.
pub fn get_preview_parameter() -> Option<String> {
    get_url_parameter("activityPreview").or_else(|| get_url_parameter("fbpvm"))
}
