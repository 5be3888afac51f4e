//! Banner shown when a bridge operation needs a newer app build. The
//! version-gated bridge calls fire the `upgrade-app` DOM event instead of
//! calling a handler the old client does not have.

use crate::fb_api::FbApi;
use crate::styles;
use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

#[function_component(UpgradePrompt)]
pub fn upgrade_prompt() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "upgrade-app", move |_| {
                    visible.set(true);
                })
            });
            move || drop(listener)
        });
    }

    let dismiss = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    let go_market = Callback::from(|_: MouseEvent| {
        spawn_local(async {
            if let Err(e) = FbApi::push_to_application_market().await {
                log::warn!("open application market failed: {e}");
            }
        });
    });

    if !*visible {
        return html! {};
    }

    html! {
        <div class={styles::UPGRADE_BANNER}>
            <p class="text-sm text-gray-900">{"当前版本过低，请升级 Fanbook 后使用该功能"}</p>
            <div class="mt-3 flex justify-center gap-4 text-sm">
                <button class="text-gray-400" onclick={dismiss}>{"取消"}</button>
                <button class="font-semibold text-blue-500" onclick={go_market}>{"去升级"}</button>
            </div>
        </div>
    }
}
