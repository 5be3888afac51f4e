//! Thin wrappers over the pure user-agent classification, bound to the
//! page's `navigator.userAgent`. The environment is fixed for the lifetime
//! of the page, so the string is read once and cached.

use once_cell::unsync::Lazy;
use shared::env::{self, DeviceType, Environment};
use web_sys::window;

thread_local! {
    static USER_AGENT: Lazy<String> = Lazy::new(|| {
        window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default()
    });
}

pub fn user_agent() -> String {
    USER_AGENT.with(|ua| (**ua).clone())
}

pub fn current_environment() -> Environment {
    env::classify(&user_agent())
}

pub fn in_fanbook() -> bool {
    current_environment().in_fanbook()
}

pub fn in_amusement_park() -> bool {
    current_environment() == Environment::AmusementPark
}

pub fn in_fanbook_html() -> bool {
    current_environment() == Environment::FanbookHtml
}

pub fn in_miniprogram() -> bool {
    current_environment() == Environment::Miniprogram
}

pub fn device_type() -> DeviceType {
    env::device_type(&user_agent())
}

pub fn in_apple_device() -> bool {
    device_type() == DeviceType::Apple
}

pub fn in_android_device() -> bool {
    device_type() == DeviceType::Android
}

pub fn check_app_version(min: &str) -> bool {
    env::check_app_version(&user_agent(), min)
}

/// `(header name, value)` pair identifying the device class.
pub fn device_type_header() -> (&'static str, &'static str) {
    ("AppType", device_type().header_value())
}
