//! Edge-docked buttons opening the prize-history and rules sheets.

use crate::api::lottery;
use crate::components::{BottomSheet, Empty, StickyButton};
use crate::hooks::use_activity_info::use_activity_info;
use crate::models::LotteryRecordItem;
use crate::styles;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const PAGE_SIZE: u32 = 20;

#[function_component(SectionStickyButton)]
pub fn section_sticky_button() -> Html {
    let info = use_activity_info();
    let prize_visible = use_state(|| false);
    let rule_visible = use_state(|| false);
    let records = use_state(Vec::<LotteryRecordItem>::new);
    let page = use_state(|| 1u32);
    let has_more = use_state(|| true);
    let loading = use_state(|| false);

    let load_page = {
        let activity_id = info.activity_id;
        let records = records.clone();
        let page = page.clone();
        let has_more = has_more.clone();
        let loading = loading.clone();
        Callback::from(move |_: ()| {
            if *loading || !*has_more {
                return;
            }
            loading.set(true);
            let current_page = *page;
            let records = records.clone();
            let page = page.clone();
            let has_more = has_more.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match lottery::get_lottery_record(activity_id, current_page, PAGE_SIZE).await {
                    Ok(resp) => {
                        let mut merged = (*records).clone();
                        merged.extend(resp.list);
                        has_more.set((current_page as i64) < resp.pagination.last_page);
                        page.set(current_page + 1);
                        records.set(merged);
                    }
                    Err(e) => log::error!("获取中奖记录失败: {e}"),
                }
                loading.set(false);
            });
        })
    };

    let open_prizes = {
        let prize_visible = prize_visible.clone();
        let records = records.clone();
        let page = page.clone();
        let has_more = has_more.clone();
        let load_page = load_page.clone();
        Callback::from(move |_: MouseEvent| {
            records.set(Vec::new());
            page.set(1);
            has_more.set(true);
            prize_visible.set(true);
            load_page.emit(());
        })
    };

    let open_rules = {
        let rule_visible = rule_visible.clone();
        Callback::from(move |_: MouseEvent| rule_visible.set(true))
    };

    let close_prizes = {
        let prize_visible = prize_visible.clone();
        Callback::from(move |_: ()| prize_visible.set(false))
    };

    let close_rules = {
        let rule_visible = rule_visible.clone();
        Callback::from(move |_: ()| rule_visible.set(false))
    };

    let load_more = {
        let load_page = load_page.clone();
        Callback::from(move |_: MouseEvent| load_page.emit(()))
    };

    let rule = info
        .activity_info
        .as_ref()
        .map(|a| a.rule.clone())
        .unwrap_or_default();

    html! {
        <>
            <div class={styles::STICKY_BUTTONS}>
                <StickyButton text="我的奖品" onclick={open_prizes} />
                <StickyButton text="活动规则" onclick={open_rules} />
            </div>

            <BottomSheet title="我的奖品" visible={*prize_visible} on_close={close_prizes}>
                if records.is_empty() && !*loading {
                    <Empty text="还没有中奖记录" />
                } else {
                    <div>
                        { for records.iter().map(|item| html! {
                            <div key={item.reward_record_id} class="flex items-center gap-3 border-b border-gray-100 py-2 last:border-b-0">
                                if !item.gift_img.is_empty() {
                                    <img class="h-10 w-10 rounded-lg object-contain" src={item.gift_img.clone()} alt={item.gift_name.clone()} />
                                }
                                <div class="min-w-0 flex-1">
                                    <div class="truncate text-sm text-gray-900">{&item.gift_name}</div>
                                    if !item.cd_key.is_empty() {
                                        <div class="truncate text-xs text-gray-400">{format!("兑换码: {}", item.cd_key)}</div>
                                    }
                                </div>
                                <span class="text-xs text-gray-400">{&item.created_at}</span>
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

            <BottomSheet title="活动规则" visible={*rule_visible} on_close={close_rules}>
                if rule.is_empty() {
                    <Empty text="暂无规则说明" />
                } else {
                    <p class="whitespace-pre-wrap text-sm leading-6 text-gray-700">{rule}</p>
                }
            </BottomSheet>
        </>
    }
}
