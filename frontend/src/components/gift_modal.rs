//! Post-draw reveal modal.

use crate::fb_api::FbApi;
use crate::styles;
use crate::ua;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct GiftModalData {
    pub gift_name: String,
    pub gift_image: String,
    /// False for the consolation "thanks for playing" result.
    pub is_prize: bool,
    pub redeem_code: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct GiftModalProps {
    pub data: Option<GiftModalData>,
    pub on_close: Callback<()>,
}

async fn copy_to_clipboard(text: String) {
    if ua::in_fanbook() {
        match FbApi::set_clipboard_data(&text).await {
            Ok(()) => FbApi::toast("复制成功"),
            Err(e) => {
                log::error!("clipboard bridge failed: {e}");
                FbApi::toast("复制失败");
            }
        }
        return;
    }
    let Some(window) = window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    match JsFuture::from(clipboard.write_text(&text)).await {
        Ok(_) => FbApi::toast("复制成功"),
        Err(e) => {
            log::error!("clipboard write failed: {e:?}");
            FbApi::toast("复制失败");
        }
    }
}

#[function_component(GiftModal)]
pub fn gift_modal(props: &GiftModalProps) -> Html {
    let Some(data) = &props.data else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let redeem_code = data.redeem_code.clone();
    let copy = {
        let redeem_code = redeem_code.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(code) = redeem_code.clone() {
                spawn_local(copy_to_clipboard(code));
            }
        })
    };

    let title = if data.is_prize { "恭喜中奖" } else { "谢谢参与" };

    html! {
        <div class={styles::MODAL_MASK}>
            <div class={styles::MODAL_BODY}>
                <div class={styles::MODAL_TITLE}>{title}</div>
                if !data.gift_image.is_empty() {
                    <img class={styles::MODAL_IMAGE} src={data.gift_image.clone()} alt={data.gift_name.clone()} />
                }
                <div class="text-sm font-medium text-gray-900">{&data.gift_name}</div>
                if data.is_prize {
                    <p class={styles::MODAL_DESC}>{"奖品需要到Fanbook客户端领取 快去领取吧!"}</p>
                }
                if let Some(code) = redeem_code {
                    <div class={styles::REDEEM_CODE}>
                        <span>{code}</span>
                        <button class="text-blue-500" onclick={copy}>{"复制"}</button>
                    </div>
                }
                <button class={styles::MODAL_BUTTON} onclick={close}>{"我知道了"}</button>
            </div>
        </div>
    }
}
