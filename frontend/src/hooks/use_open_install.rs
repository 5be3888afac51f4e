//! Hook wrapper over the OpenInstall fallback service.

use crate::auth;
use crate::install::{self, OpenFanbookParams};
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct OpenInstallHandle {
    pub is_ready: bool,
    pub error: Option<String>,
    pub open_fanbook: Callback<OpenFanbookParams>,
    pub reinitialize: Callback<()>,
}

/// Initializes the install SDK on mount unless `should_initialize` is
/// false (it is pointless inside the host app — that is a caller error the
/// service turns into a no-op). An `ic` query parameter is baked into the
/// wake-up payload.
#[hook]
pub fn use_open_install(should_initialize: bool) -> OpenInstallHandle {
    let is_ready = use_state(install::is_ready);
    let error = use_state(|| None::<String>);

    fn init_params() -> Option<serde_json::Value> {
        auth::get_ic_from_url().map(|code| json!({ "code": code }))
    }

    {
        let is_ready = is_ready.clone();
        let error = error.clone();
        use_effect_with(should_initialize, move |should_initialize| {
            if *should_initialize && !install::is_ready() {
                spawn_local(async move {
                    match install::initialize(init_params()).await {
                        Ok(()) => {
                            is_ready.set(true);
                            error.set(None);
                        }
                        Err(e) => {
                            log::error!("OpenInstall initialization failed: {e}");
                            error.set(Some(e.to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let open_fanbook = {
        Callback::from(move |params: OpenFanbookParams| {
            if !should_initialize {
                log::info!("OpenInstall 未初始化，跳过打开 Fanbook");
                return;
            }
            install::open_fanbook(&params);
        })
    };

    let reinitialize = {
        let is_ready = is_ready.clone();
        let error = error.clone();
        Callback::from(move |_| {
            if !should_initialize {
                return;
            }
            let is_ready = is_ready.clone();
            let error = error.clone();
            let params = init_params();
            is_ready.set(false);
            spawn_local(async move {
                match install::reinitialize(params).await {
                    Ok(()) => {
                        is_ready.set(true);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    OpenInstallHandle {
        is_ready: should_initialize && *is_ready,
        error: (*error).clone(),
        open_fanbook,
        reinitialize,
    }
}
