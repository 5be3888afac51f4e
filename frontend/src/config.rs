use web_sys::window;

/// Application key the backend hands out for request signing.
pub const APP_KEY: &str = "fb-activity-h5";
/// Shared secret appended to the canonical signing string.
pub const APP_SECRET: &str = "9tC2mZsVYxwqhTkd";
/// Platform tag carried in the signed headers.
pub const PLATFORM: &str = "web";

/// OpenInstall application key for the wake-up-or-install fallback.
pub const OPENINSTALL_APP_KEY: &str = "rmst4o";

pub fn get_api_base_url() -> String {
    // On the production host the API is same-origin; anywhere else keep the
    // current host so the page works when opened from another device.
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if host.contains("fanbook.cn") {
                return String::new();
            }
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    "http://127.0.0.1:3000".to_string()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_api_base_url(), path)
    }
}
