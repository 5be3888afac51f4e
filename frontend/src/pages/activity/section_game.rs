//! Draw section: template-selected game plus the remaining-draws chip.

use super::game::big_wheel::{BigWheelGame, WheelSegment};
use super::game::squared_pager::{PagerItem, SquaredPagerGame};
use super::game::TargetResolver;
use crate::api::lottery;
use crate::components::{GiftModal, GiftModalData};
use crate::fb_api::FbApi;
use crate::hooks::use_activity_info::use_activity_info;
use crate::models::{LotteryGift, TEMPLATE_SQUARED_PAPER};
use crate::report::{report, ReportData, EVENT_TASK_DRAW};
use crate::styles;
use serde_json::json;
use shared::mode::ActivityMode;
use yew::prelude::*;

#[function_component(SectionGame)]
pub fn section_game() -> Html {
    let info = use_activity_info();
    let lottery_result = use_mut_ref(|| None::<LotteryGift>);
    let modal_data = use_state(|| None::<GiftModalData>);

    let Some(activity) = info.activity_info.clone() else {
        return html! {};
    };

    let can_play = info.mode == ActivityMode::Normal && info.lottery_times > 0;

    // Prize list in server position order; index order is the contract the
    // draw result is resolved against.
    let gift_ids: Vec<i64> = activity.gift.iter().map(|g| g.gift.gift_id).collect();

    let resolve_target = {
        let activity_id = info.activity_id;
        let gift_ids = gift_ids.clone();
        let lottery_result = lottery_result.clone();
        let update_lottery_times = info.update_lottery_times.clone();
        TargetResolver::new(move || {
            let gift_ids = gift_ids.clone();
            let lottery_result = lottery_result.clone();
            let update_lottery_times = update_lottery_times.clone();
            async move {
                let result = lottery::get_lottery_result(activity_id)
                    .await
                    .map_err(|e| e.to_string())?;
                let winning_index = gift_ids
                    .iter()
                    .position(|id| *id == result.gift_id)
                    .ok_or_else(|| {
                        format!("中奖礼包 {} 不在奖品列表中", result.gift_id)
                    })?;
                *lottery_result.borrow_mut() = Some(result);
                update_lottery_times.emit(());
                Ok(winning_index)
            }
        })
    };

    let on_draw_start = {
        let activity_id = info.activity_id;
        let activity_full_url = info.activity_full_url.clone();
        Callback::from(move |_: ()| {
            report(ReportData {
                event_id: EVENT_TASK_DRAW,
                event_sub_id: "actv_draw_click",
                event_sub_param: None,
                ext_json: Some(json!({
                    "actv_id": activity_id,
                    "actv_url": activity_full_url,
                })),
            });
        })
    };

    let open_result_modal = {
        let lottery_result = lottery_result.clone();
        let modal_data = modal_data.clone();
        move || {
            if let Some(result) = lottery_result.borrow().as_ref() {
                modal_data.set(Some(GiftModalData {
                    gift_name: result.gift_name.clone(),
                    gift_image: result.gift_img.clone(),
                    is_prize: result.gift_type != 0,
                    redeem_code: result.cd_key.clone().filter(|c| !c.is_empty()),
                }));
            }
        }
    };

    let on_draw_complete = {
        let open_result_modal = open_result_modal.clone();
        Callback::from(move |item: PagerItem| {
            log::info!("抽中了: {}", item.name);
            open_result_modal();
        })
    };

    let on_spin_complete = {
        Callback::from(move |segment: WheelSegment| {
            log::info!("旋转结束，获得奖品: {}", segment.name);
            open_result_modal();
        })
    };

    let on_unavailable_click = {
        let lottery_times = info.lottery_times;
        let mode = info.mode;
        Callback::from(move |_: ()| {
            if mode != ActivityMode::Normal {
                FbApi::toast("请在 Fanbook 客户端参与抽奖");
            } else if lottery_times <= 0 {
                FbApi::toast("抽奖次数不足，请先做任务");
            } else {
                FbApi::toast("游戏不可用");
            }
        })
    };

    let on_drawing_click = Callback::from(|_: ()| {
        FbApi::toast("正在抽奖中，请稍候");
    });

    let on_error = Callback::from(|message: String| {
        FbApi::toast(&message);
    });

    let on_modal_close = {
        let lottery_result = lottery_result.clone();
        let modal_data = modal_data.clone();
        Callback::from(move |_: ()| {
            // The result only lives long enough to feed the reveal.
            lottery_result.borrow_mut().take();
            modal_data.set(None);
        })
    };

    let game = if activity.template_type == TEMPLATE_SQUARED_PAPER {
        let items: Vec<PagerItem> = activity
            .gift
            .iter()
            .map(|g| PagerItem {
                id: g.gift.gift_id,
                name: g.gift.name.clone(),
                image: g.gift.img.clone(),
                display: true,
            })
            .collect();
        html! {
            <SquaredPagerGame
                {items}
                resolve_target={resolve_target}
                {can_play}
                background_image={activity.draw_img.clone()}
                start_button_image={activity.draw_button_img.clone()}
                {on_draw_start}
                {on_draw_complete}
                {on_drawing_click}
                {on_unavailable_click}
                {on_error}
            />
        }
    } else {
        let segments: Vec<WheelSegment> = activity
            .gift
            .iter()
            .map(|g| WheelSegment {
                id: g.gift.gift_id,
                name: g.gift.name.clone(),
                image: g.gift.img.clone(),
            })
            .collect();
        html! {
            <BigWheelGame
                {segments}
                resolve_target={resolve_target}
                {can_play}
                background_image={activity.draw_img.clone()}
                arrow_image={activity.draw_button_img.clone()}
                on_spin_start={on_draw_start}
                {on_spin_complete}
                on_spinning_click={on_drawing_click}
                {on_unavailable_click}
                {on_error}
            />
        }
    };

    html! {
        <div class={styles::GAME_SECTION}>
            <div class="flex flex-col gap-y-7">
                {game}
                if info.mode != ActivityMode::Guest {
                    <div class="lottery-times mt-[0.75rem] flex items-center justify-center">
                        <div class={styles::LOTTERY_TIMES_CHIP}>
                            <span class="text-sm text-navy">{"抽奖次数："}</span>
                            <span class="pl-[0.12rem] text-[1.25rem] leading-[1.75rem] text-orange">
                                {info.lottery_times}
                            </span>
                        </div>
                    </div>
                }
                <GiftModal data={(*modal_data).clone()} on_close={on_modal_close} />
            </div>
        </div>
    }
}
