//! OpenInstall wake-up-or-install fallback for plain-browser visitors.
//!
//! The SDK script is loaded lazily and at most once per page; concurrent
//! initializers join the in-flight attempt. The lifecycle itself is the
//! explicit state machine in `shared::install`; this module owns the DOM
//! side: the script tag, the SDK construction and the wake-up calls.

use crate::config::OPENINSTALL_APP_KEY;
use crate::fb_api::FbApi;
use crate::ua;
use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use shared::install::{InitAction, InstallError, InstallStateMachine};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlScriptElement};

const SCRIPT_ID: &str = "openinstall-script";
const SCRIPT_SRC: &str = "//res.cdn.openinstall.io/openinstall.js";
const SCRIPT_TIMEOUT_MS: u32 = 10_000;
/// How long the SDK races the app switch before falling through to the
/// store landing page.
const WAKEUP_TIMEOUT_MS: u32 = 1000;

thread_local! {
    static MACHINE: RefCell<InstallStateMachine> = RefCell::new(InstallStateMachine::new());
    static WAITERS: RefCell<Vec<oneshot::Sender<Result<(), InstallError>>>> =
        const { RefCell::new(Vec::new()) };
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{value:?}"))
}

fn settle(result: Result<(), InstallError>) {
    MACHINE.with(|m| {
        let mut m = m.borrow_mut();
        match &result {
            Ok(()) => {
                m.ready();
            }
            Err(e) => {
                m.fail(e.0.clone());
            }
        }
    });
    for waiter in WAITERS.with(|w| w.borrow_mut().drain(..).collect::<Vec<_>>()) {
        let _ = waiter.send(result.clone());
    }
}

/// Loads the SDK script and constructs the instance. Only ever entered by
/// the caller the state machine elected to start the load.
async fn perform_load(params: Option<serde_json::Value>) -> Result<(), InstallError> {
    let window = window().ok_or_else(|| InstallError("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| InstallError("no document".into()))?;

    let script: HtmlScriptElement = match document.get_element_by_id(SCRIPT_ID) {
        Some(el) => el
            .dyn_into()
            .map_err(|_| InstallError("stale element under script id".into()))?,
        None => {
            let el: HtmlScriptElement = document
                .create_element("script")
                .map_err(|e| InstallError(js_error(e)))?
                .dyn_into()
                .map_err(|_| InstallError("script element cast failed".into()))?;
            el.set_id(SCRIPT_ID);
            el.set_src(SCRIPT_SRC);
            el.set_async(true);
            document
                .head()
                .ok_or_else(|| InstallError("no document head".into()))?
                .append_child(&el)
                .map_err(|e| InstallError(js_error(e)))?;
            el
        }
    };

    // Wait for the script, bounded by a fixed wall-clock timeout.
    let (load_tx, load_rx) = oneshot::channel::<Result<(), InstallError>>();
    let load_tx = std::rc::Rc::new(RefCell::new(Some(load_tx)));

    let onload_tx = load_tx.clone();
    let onload = Closure::once(move || {
        if let Some(tx) = onload_tx.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });
    let onerror_tx = load_tx.clone();
    let onerror = Closure::once(move || {
        if let Some(tx) = onerror_tx.borrow_mut().take() {
            let _ = tx.send(Err(InstallError("script load failed".into())));
        }
    });
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    let loaded = futures::future::select(
        Box::pin(load_rx),
        Box::pin(TimeoutFuture::new(SCRIPT_TIMEOUT_MS)),
    )
    .await;
    match loaded {
        futures::future::Either::Left((result, _)) => {
            result.map_err(|_| InstallError("script load interrupted".into()))??;
        }
        futures::future::Either::Right(_) => {
            return Err(InstallError(format!(
                "script load timed out after {SCRIPT_TIMEOUT_MS}ms"
            )));
        }
    }

    // Script is in; construct the SDK and wait for its own ready callback.
    let ctor: Function = Reflect::get(&window, &JsValue::from_str("OpenInstall"))
        .map_err(|e| InstallError(js_error(e)))?
        .dyn_into()
        .map_err(|_| InstallError("script loaded but OpenInstall is undefined".into()))?;

    let (ready_tx, ready_rx) = oneshot::channel::<()>();
    let onready = Closure::once(move || {
        log::info!("OpenInstall ready");
        let _ = ready_tx.send(());
    });

    let options = Object::new();
    Reflect::set(&options, &"appKey".into(), &OPENINSTALL_APP_KEY.into())
        .map_err(|e| InstallError(js_error(e)))?;
    Reflect::set(&options, &"preferWakeup".into(), &true.into())
        .map_err(|e| InstallError(js_error(e)))?;
    Reflect::set(&options, &"onready".into(), onready.as_ref())
        .map_err(|e| InstallError(js_error(e)))?;
    onready.forget();

    let args = Array::new();
    args.push(&options);
    match &params {
        Some(value) => {
            let js = JsValue::from_serde(value).map_err(|e| InstallError(e.to_string()))?;
            args.push(&js);
        }
        None => {
            args.push(&JsValue::UNDEFINED);
        }
    }

    let instance = Reflect::construct(&ctor, &args)
        .map_err(|e| InstallError(format!("OpenInstall construction failed: {}", js_error(e))))?;
    Reflect::set(&window, &"openInstall".into(), &instance)
        .map_err(|e| InstallError(js_error(e)))?;

    ready_rx
        .await
        .map_err(|_| InstallError("SDK ready callback dropped".into()))
}

/// Initializes the SDK (idempotent). `params` are baked into the deep-link
/// payload the SDK reports on wake-up, e.g. the invite code.
pub async fn initialize(params: Option<serde_json::Value>) -> Result<(), InstallError> {
    let action = MACHINE.with(|m| m.borrow_mut().request_initialize());
    match action {
        InitAction::AlreadyReady => Ok(()),
        InitAction::Failed(msg) => Err(InstallError(msg)),
        InitAction::Join => {
            let (tx, rx) = oneshot::channel();
            WAITERS.with(|w| w.borrow_mut().push(tx));
            rx.await
                .unwrap_or_else(|_| Err(InstallError("initialization abandoned".into())))
        }
        InitAction::StartLoad => {
            let result = perform_load(params).await;
            settle(result.clone());
            result
        }
    }
}

/// Tears the singleton down (state, script tag, SDK global) and runs a
/// fresh initialization, e.g. to bake a different invite code into the
/// payload.
pub async fn reinitialize(params: Option<serde_json::Value>) -> Result<(), InstallError> {
    MACHINE.with(|m| m.borrow_mut().reset());
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(el) = document.get_element_by_id(SCRIPT_ID) {
            el.remove();
        }
    }
    if let Some(window) = window() {
        let _ = Reflect::set(&window, &"openInstall".into(), &JsValue::UNDEFINED);
    }
    initialize(params).await
}

pub fn is_ready() -> bool {
    MACHINE.with(|m| m.borrow().is_ready())
}

/// Deep-link payload for `wakeupOrInstall`. Wire names are the SDK's.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct OpenFanbookParams {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "guildId")]
    pub guild_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "urlStr")]
    pub url_str: Option<String>,
}

fn wakeup_or_install(data: &JsValue) {
    let Some(window) = window() else {
        return;
    };
    let instance = match Reflect::get(&window, &JsValue::from_str("openInstall")) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => {
            log::error!("OpenInstall 未初始化，无法打开 Fanbook");
            return;
        }
    };
    let method: Function = match Reflect::get(&instance, &JsValue::from_str("wakeupOrInstall"))
        .ok()
        .and_then(|m| m.dyn_into().ok())
    {
        Some(f) => f,
        None => {
            log::error!("openInstall.wakeupOrInstall missing");
            return;
        }
    };

    let options = Object::new();
    let _ = Reflect::set(&options, &"data".into(), data);
    let _ = Reflect::set(&options, &"timeout".into(), &JsValue::from_f64(WAKEUP_TIMEOUT_MS as f64));
    if let Err(e) = method.call1(&instance, &options) {
        log::error!("wakeupOrInstall failed: {}", js_error(e));
    }
}

/// Wakes up (or routes to installing) the app on a given in-app path.
/// A call before successful initialization is a logged no-op.
pub fn open_fanbook(params: &OpenFanbookParams) {
    if !is_ready() {
        log::error!("OpenInstall 未就绪，无法打开 Fanbook");
        return;
    }
    match JsValue::from_serde(params) {
        Ok(data) => wakeup_or_install(&data),
        Err(e) => log::error!("invalid wakeup payload: {e}"),
    }
}

/// Wake-up for an invite landing: the invite code rides both as the SDK
/// `code` field and as the query string the app parses after the jump.
pub fn open_fanbook_with_invite(code: &str, target_link: Option<&str>) {
    let query = shared::invite::generate_invite_url_query(code, target_link);
    open_fanbook(&OpenFanbookParams {
        path: String::new(),
        code: Some(code.to_string()),
        url_str: Some(query),
        ..Default::default()
    });
}

/// Bare wake-up into the game container.
pub fn open_amusement_park_via_openinstall() {
    #[derive(Serialize)]
    struct Data<'a> {
        scene: &'a str,
    }
    match JsValue::from_serde(&Data { scene: "amusement-park" }) {
        Ok(data) => wakeup_or_install(&data),
        Err(e) => log::error!("invalid wakeup payload: {e}"),
    }
}

/// Routes a task deep-link through the environment-appropriate channel:
/// the native bridge inside Fanbook, the install fallback outside it.
pub async fn on_env_handle_activity_task(args: serde_json::Value) {
    if ua::in_fanbook() {
        if let Err(e) = FbApi::dispatch_activity_task_value(&args).await {
            log::error!("dispatchActivityTask failed: {e}");
        }
    } else if let Some(code) = crate::auth::get_ic_from_url() {
        open_fanbook_with_invite(&code, None);
    } else {
        open_fanbook(&OpenFanbookParams { path: String::new(), ..Default::default() });
    }
}
