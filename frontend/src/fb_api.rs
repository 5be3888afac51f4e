//! Native bridge into the Fanbook host app.
//!
//! Inside any Fanbook container the webview exposes a single RPC channel,
//! `window.flutter_inappwebview.callHandler(name, ...args)`. Every
//! operation here forwards to that channel; outside the containers most
//! operations reject, and the few user-facing ones degrade to web
//! equivalents instead.

use crate::components::toast::Toaster;
use crate::install;
use crate::ua;
use gloo_timers::future::TimeoutFuture;
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Promise, Reflect};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Event};

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// The bridge channel does not exist outside the host app.
    OutsideHost(String),
    /// The native side rejected the call.
    Native { method: String, message: String },
    Js(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::OutsideHost(name) => {
                write!(f, "调用 {name} 失败：不在 Fanbook 环境中")
            }
            BridgeError::Native { method, message } => {
                write!(f, "native {method} failed: {message}")
            }
            BridgeError::Js(msg) => write!(f, "bridge interop failed: {msg}"),
        }
    }
}

impl std::error::Error for BridgeError {}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Forwards one call to the native handler channel. The short delay gives
/// the webview time to attach the channel object; the host exposes no
/// ready signal to wait on instead.
async fn call_app_func(name: &str, args: Array) -> Result<JsValue, BridgeError> {
    TimeoutFuture::new(17).await;

    if !ua::in_fanbook() {
        return Err(BridgeError::OutsideHost(name.to_string()));
    }
    let window = window().ok_or_else(|| BridgeError::Js("no window".into()))?;
    let bridge = Reflect::get(&window, &JsValue::from_str("flutter_inappwebview"))
        .map_err(|e| BridgeError::Js(js_error(e)))?;
    if bridge.is_undefined() || bridge.is_null() {
        return Err(BridgeError::OutsideHost(name.to_string()));
    }
    let call_handler: Function = Reflect::get(&bridge, &JsValue::from_str("callHandler"))
        .map_err(|e| BridgeError::Js(js_error(e)))?
        .dyn_into()
        .map_err(|_| BridgeError::Js("callHandler is not a function".into()))?;

    let full_args = Array::new();
    full_args.push(&JsValue::from_str(name));
    for arg in args.iter() {
        full_args.push(&arg);
    }

    let result = call_handler
        .apply(&bridge, &full_args)
        .map_err(|e| BridgeError::Js(js_error(e)))?;
    let promise: Promise = result
        .dyn_into()
        .map_err(|_| BridgeError::Js(format!("{name} did not return a promise")))?;
    JsFuture::from(promise).await.map_err(|e| BridgeError::Native {
        method: name.to_string(),
        message: js_error(e),
    })
}

async fn call_typed<T: for<'de> Deserialize<'de>>(
    name: &str,
    args: Array,
) -> Result<T, BridgeError> {
    let value = call_app_func(name, args).await?;
    value
        .into_serde()
        .map_err(|e| BridgeError::Js(format!("{name} returned unexpected shape: {e}")))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, BridgeError> {
    JsValue::from_serde(value).map_err(|e| BridgeError::Js(e.to_string()))
}

fn dispatch_upgrade_event() {
    if let Some(window) = window() {
        if let Ok(event) = Event::new("upgrade-app") {
            let _ = window.dispatch_event(&event);
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default, rename = "shortId")]
    pub short_id: String,
    #[serde(default)]
    pub badge: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChannelInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GuildInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "ownerId")]
    pub owner_id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Locale {
    #[serde(rename = "languageCode")]
    pub language_code: String,
    #[serde(default, rename = "countryCode")]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PhysicalSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ViewPadding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SystemInfo {
    #[serde(rename = "textScaleFactor")]
    pub text_scale_factor: f64,
    #[serde(rename = "devicePixelRatio")]
    pub device_pixel_ratio: f64,
    pub locale: Locale,
    #[serde(rename = "physicalSize")]
    pub physical_size: PhysicalSize,
    #[serde(rename = "platformBrightness")]
    pub platform_brightness: String,
    #[serde(rename = "viewPadding")]
    pub view_padding: ViewPadding,
}

impl SystemInfo {
    /// The documented fallback when the bridge cannot answer.
    pub fn default_record() -> Self {
        Self {
            text_scale_factor: 1.0,
            device_pixel_ratio: 1.0,
            locale: Locale { language_code: "en".into(), country_code: Some("US".into()) },
            physical_size: PhysicalSize { width: 0.0, height: 0.0 },
            platform_brightness: "light".into(),
            view_padding: ViewPadding { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 },
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceInfo {
    #[serde(default)]
    pub event_sub_id: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
}

/// Arguments of the unified activity-task jump. Field names are the wire
/// names the native side expects.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DispatchActivityTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "guildId")]
    pub guild_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "appId")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "keepCurrent")]
    pub keep_current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "externalLink")]
    pub external_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "internalLink")]
    pub internal_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "activityId")]
    pub activity_id: Option<String>,
}

thread_local! {
    static TOASTER: RefCell<Option<Toaster>> = const { RefCell::new(None) };
}

pub struct FbApi;

impl FbApi {
    pub async fn get_user_info() -> Result<UserInfo, BridgeError> {
        call_typed("getUserInfo", Array::new()).await
    }

    /// Never rejects: a bridge failure resolves to the empty string and the
    /// server's 401-equivalent stays the real authority on auth failure.
    pub async fn get_user_token() -> String {
        TimeoutFuture::new(50).await;
        #[derive(Deserialize)]
        struct TokenResp {
            token: String,
        }
        match call_typed::<TokenResp>("getUserToken", Array::new()).await {
            Ok(resp) => resp.token,
            Err(e) => {
                log::warn!("getUserToken failed, continuing unauthenticated: {e}");
                String::new()
            }
        }
    }

    /// Never rejects; falls back to the documented default record.
    pub async fn get_system_info() -> SystemInfo {
        TimeoutFuture::new(50).await;
        match call_typed::<SystemInfo>("getSystemInfo", Array::new()).await {
            Ok(info) => info,
            Err(e) => {
                log::warn!("getSystemInfo failed, using defaults: {e}");
                SystemInfo::default_record()
            }
        }
    }

    /// Native toast inside the game container, DOM toast everywhere else.
    pub fn toast(text: &str) {
        if ua::in_amusement_park() {
            let text = text.to_string();
            wasm_bindgen_futures::spawn_local(async move {
                let args = Array::new();
                #[derive(Serialize)]
                struct ToastArgs<'a> {
                    message: &'a str,
                }
                if let Ok(arg) = to_js(&ToastArgs { message: &text }) {
                    args.push(&arg);
                }
                if let Err(e) = call_app_func("toast", args).await {
                    log::warn!("native toast failed: {e}");
                }
            });
        } else {
            TOASTER.with(|t| {
                t.borrow_mut().get_or_insert_with(Toaster::new).show(text);
            });
        }
    }

    pub async fn set_clipboard_data(text: &str) -> Result<(), BridgeError> {
        let args = Array::new();
        args.push(&JsValue::from_str(text));
        call_app_func("setClipboardData", args).await.map(|_| ())
    }

    pub async fn get_current_channel() -> Result<Option<ChannelInfo>, BridgeError> {
        call_typed("getCurrentChannel", Array::new()).await
    }

    pub async fn get_current_guild() -> Result<Option<GuildInfo>, BridgeError> {
        call_typed("getCurrentGuild", Array::new()).await
    }

    pub async fn get_source_info() -> Result<SourceInfo, BridgeError> {
        if !ua::in_amusement_park() {
            return Ok(SourceInfo { event_sub_id: None, channel_id: None });
        }
        call_typed("getSourceInfo", Array::new()).await
    }

    /// Unified deep-link jump for activity tasks.
    pub async fn dispatch_activity_task(
        args: &DispatchActivityTaskArgs,
    ) -> Result<(), BridgeError> {
        let js_args = Array::new();
        js_args.push(&to_js(args)?);
        call_app_func("dispatchActivityTask", js_args).await.map(|_| ())
    }

    /// Raw variant for task actions whose payload came straight off the
    /// task definition JSON.
    pub async fn dispatch_activity_task_value(
        args: &serde_json::Value,
    ) -> Result<(), BridgeError> {
        let js_args = Array::new();
        js_args.push(&to_js(args)?);
        call_app_func("dispatchActivityTask", js_args).await.map(|_| ())
    }

    pub fn show_user_info_popup(user_id: &str) {
        #[derive(Serialize)]
        struct Args<'a> {
            #[serde(rename = "userId")]
            user_id: &'a str,
        }
        let user_id = user_id.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let args = Array::new();
            if let Ok(arg) = to_js(&Args { user_id: &user_id }) {
                args.push(&arg);
            }
            if let Err(e) = call_app_func("showUserInfoPopup", args).await {
                log::warn!("showUserInfoPopup failed: {e}");
            }
        });
    }

    /// Opens a standalone mini-program; requires app >= 2.2.5, otherwise
    /// asks the UI layer to show the upgrade prompt.
    pub fn open_miniprogram(app_id: &str) {
        if !ua::check_app_version("2.2.5") {
            dispatch_upgrade_event();
            return;
        }
        #[derive(Serialize)]
        struct Args<'a> {
            #[serde(rename = "appId")]
            app_id: &'a str,
        }
        let app_id = app_id.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let args = Array::new();
            if let Ok(arg) = to_js(&Args { app_id: &app_id }) {
                args.push(&arg);
            }
            if let Err(e) = call_app_func("openMiniProgram", args).await {
                log::warn!("openMiniProgram failed: {e}");
            }
        });
    }

    /// Status-reporting variant, available from 2.4.1.
    pub async fn open_mini_program_async(app_id: &str) -> Result<bool, BridgeError> {
        if !ua::check_app_version("2.4.1") {
            dispatch_upgrade_event();
            return Ok(false);
        }
        #[derive(Serialize)]
        struct Args<'a> {
            #[serde(rename = "appId")]
            app_id: &'a str,
        }
        #[derive(Deserialize)]
        struct Resp {
            status: String,
        }
        let args = Array::new();
        args.push(&to_js(&Args { app_id })?);
        let resp: Resp = call_typed("openMiniProgramAsync", args).await?;
        Ok(resp.status == "success")
    }

    /// Launches a mini-game by id; iOS and Android carry distinct ids.
    pub async fn open_game(game_id: i64) -> Result<(), BridgeError> {
        #[derive(Serialize)]
        struct Args {
            #[serde(rename = "gameId")]
            game_id: i64,
        }
        let args = Array::new();
        args.push(&to_js(&Args { game_id })?);
        call_app_func("openGame", args).await.map(|_| ())
    }

    /// Opens the mini-game team-up entry.
    pub async fn open_mini_game_team(game_id: i64) -> Result<(), BridgeError> {
        #[derive(Serialize)]
        struct Args {
            #[serde(rename = "gameId")]
            game_id: i64,
        }
        let args = Array::new();
        args.push(&to_js(&Args { game_id })?);
        call_app_func("openMiniGameTeam", args).await.map(|_| ())
    }

    /// Generic in-app navigation to a host route or URL.
    pub async fn jump(url: &str) -> Result<(), BridgeError> {
        #[derive(Serialize)]
        struct Args<'a> {
            url: &'a str,
        }
        let args = Array::new();
        args.push(&to_js(&Args { url })?);
        call_app_func("jump", args).await.map(|_| ())
    }

    /// Closes the current mini-program and jumps to the home game tab.
    pub fn open_mini_game_tab_view(refresh: bool) {
        #[derive(Serialize)]
        struct Args {
            refresh: bool,
        }
        wasm_bindgen_futures::spawn_local(async move {
            let args = Array::new();
            if let Ok(arg) = to_js(&Args { refresh }) {
                args.push(&arg);
            }
            if let Err(e) = call_app_func("openMiniGameTabView", args).await {
                log::warn!("openMiniGameTabView failed: {e}");
            }
        });
    }

    pub async fn push_to_application_market() -> Result<(), BridgeError> {
        call_app_func("pushToApplicationMarket", Array::new()).await.map(|_| ())
    }

    pub async fn show_avatar_badge_part_share(badge_part_id: &str) -> Result<(), BridgeError> {
        #[derive(Serialize)]
        struct Args<'a> {
            #[serde(rename = "badgePartId")]
            badge_part_id: &'a str,
        }
        let args = Array::new();
        args.push(&to_js(&Args { badge_part_id })?);
        call_app_func("showAvatarBadgePartShare", args).await.map(|_| ())
    }

    /// Share the current page. In the game container the native share sheet
    /// takes a URL carrying the inviter's id; in a plain browser we fall
    /// back to waking up the app.
    pub async fn share(game_id: Option<&str>) {
        if ua::in_amusement_park() {
            let inviter = match Self::get_user_info().await {
                Ok(info) => info.user_id,
                Err(e) => {
                    log::warn!("share without inviter id: {e}");
                    String::new()
                }
            };
            let href = window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            let separator = if href.contains('?') { '&' } else { '?' };
            let share_url = format!("{href}{separator}inviter={inviter}");

            let args = Array::new();
            args.push(&JsValue::from_str(&share_url));
            if let Some(game_id) = game_id {
                args.push(&JsValue::from_str(game_id));
            }
            if let Err(e) = call_app_func("share", args).await {
                log::warn!("native share failed: {e}");
            }
        } else if ua::in_fanbook_html() {
            if !ua::check_app_version("2.2.3") {
                dispatch_upgrade_event();
            }
        } else {
            install::open_amusement_park_via_openinstall();
        }
    }
}

/// Drops the degraded-toast singleton; the next toast recreates it.
pub fn dispose_toaster() {
    TOASTER.with(|t| {
        if let Some(toaster) = t.borrow_mut().take() {
            toaster.dispose();
        }
    });
}
