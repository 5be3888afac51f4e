//! Invite history, cursor-paginated by `last_id`.

use crate::api::invite;
use crate::components::{BottomSheet, Empty};
use crate::hooks::use_activity_info::use_activity_info;
use crate::models::InviteRecordItem;
use crate::styles;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(InviteRecordEntry)]
pub fn invite_record_entry() -> Html {
    let info = use_activity_info();
    let visible = use_state(|| false);
    let records = use_state(Vec::<InviteRecordItem>::new);
    let last_id = use_state(|| 0i64);
    let has_more = use_state(|| true);
    let loading = use_state(|| false);

    let load_page = {
        let activity_id = info.activity_id;
        let records = records.clone();
        let last_id = last_id.clone();
        let has_more = has_more.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            if *loading || !*has_more {
                return;
            }
            loading.set(true);
            let cursor = *last_id;
            let records = records.clone();
            let last_id = last_id.clone();
            let has_more = has_more.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match invite::get_invite_record(activity_id, cursor).await {
                    Ok(resp) => {
                        let mut merged = (*records).clone();
                        let empty_page = resp.list.is_empty();
                        merged.extend(resp.list);
                        has_more.set(!empty_page && resp.last_id > cursor);
                        last_id.set(resp.last_id);
                        records.set(merged);
                    }
                    Err(e) => log::error!("获取邀请记录失败: {e}"),
                }
                loading.set(false);
            });
        })
    };

    let open = {
        let visible = visible.clone();
        let records = records.clone();
        let last_id = last_id.clone();
        let has_more = has_more.clone();
        let load_page = load_page.clone();
        Callback::from(move |_: MouseEvent| {
            records.set(Vec::new());
            last_id.set(0);
            has_more.set(true);
            visible.set(true);
            load_page.emit(());
        })
    };

    let close = {
        let visible = visible.clone();
        Callback::from(move |_: ()| visible.set(false))
    };

    let load_more = {
        let load_page = load_page.clone();
        Callback::from(move |_: MouseEvent| load_page.emit(()))
    };

    html! {
        <>
            <button class="text-xs text-gray-400" onclick={open}>{"邀请记录 >"}</button>
            <BottomSheet title="邀请记录" visible={*visible} on_close={close}>
                if records.is_empty() && !*loading {
                    <Empty text="还没有邀请记录" />
                } else {
                    <div>
                        { for records.iter().map(|item| html! {
                            <div key={item.id} class="flex items-center gap-3 border-b border-gray-100 py-2 last:border-b-0">
                                <img class="h-8 w-8 rounded-full object-cover" src={item.user.avatar.clone()} alt="" />
                                <span class="min-w-0 flex-1 truncate text-sm text-gray-900">
                                    {if item.user.nickname.is_empty() { &item.user.username } else { &item.user.nickname }}
                                </span>
                                <span class="text-xs text-gray-400">{"已加入"}</span>
                            </div>
                        }) }
                        if *has_more {
                            <button class={styles::LOAD_MORE} onclick={load_more} disabled={*loading}>
                                {if *loading { "加载中..." } else { "加载更多" }}
                            </button>
                        }
                    </div>
                }
            </BottomSheet>
        </>
    }
}
