//! Task section: the earn-attempts list and the invite-record entry.

use super::invite_record::InviteRecordEntry;
use crate::api::task;
use crate::hooks::use_activity_info::{use_activity_info, TaskEntry};
use crate::install::on_env_handle_activity_task;
use crate::models::{CompleteTaskParams, TaskAction};
use crate::report::{report, ReportData, EVENT_TASK_DRAW};
use crate::styles;
use serde_json::json;
use shared::task::TaskPresentStatus;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn task_button(status: TaskPresentStatus) -> (&'static str, &'static str) {
    match status {
        TaskPresentStatus::Default => ("去完成", styles::TASK_BUTTON_DEFAULT),
        TaskPresentStatus::Completed => ("领取", styles::TASK_BUTTON_CLAIM),
        TaskPresentStatus::Disabled => ("已领取", styles::TASK_BUTTON_DISABLED),
    }
}

#[function_component(SectionTask)]
pub fn section_task() -> Html {
    let info = use_activity_info();

    {
        let activity_id = info.activity_id;
        let activity_full_url = info.activity_full_url.clone();
        let has_info = info.activity_info.is_some();
        use_effect_with(has_info, move |has_info| {
            if *has_info {
                report(ReportData {
                    event_id: EVENT_TASK_DRAW,
                    event_sub_id: "actv_task_show",
                    event_sub_param: Some(activity_id.to_string()),
                    ext_json: Some(json!({
                        "actv_id": activity_id,
                        "actv_url": activity_full_url,
                    })),
                });
            }
            || ()
        });
    }

    let handle_task_click = {
        let activity_id = info.activity_id;
        let activity_full_url = info.activity_full_url.clone();
        let update_lottery_times = info.update_lottery_times.clone();
        let update_task_list = info.update_task_list.clone();
        Callback::from(move |entry: TaskEntry| {
            match entry.status {
                TaskPresentStatus::Default => {
                    report(ReportData {
                        event_id: EVENT_TASK_DRAW,
                        event_sub_id: "actv_task_click",
                        event_sub_param: Some(activity_id.to_string()),
                        ext_json: Some(json!({
                            "actv_id": activity_id,
                            "actv_url": activity_full_url,
                        })),
                    });
                    // The task definition carries its deep link as JSON.
                    let action = serde_json::from_str::<TaskAction>(&entry.data.action).ok();
                    if let Some(params) = action.and_then(|a| a.params) {
                        spawn_local(on_env_handle_activity_task(params));
                    }
                }
                TaskPresentStatus::Completed => {
                    report(ReportData {
                        event_id: EVENT_TASK_DRAW,
                        event_sub_id: "actv_task_reward_click",
                        event_sub_param: Some(activity_id.to_string()),
                        ext_json: Some(json!({
                            "actv_id": activity_id,
                            "actv_url": activity_full_url,
                        })),
                    });
                    let params = CompleteTaskParams {
                        activity_id: entry.data.activity_id,
                        activity_task_id: entry.data.activity_task_id,
                    };
                    let update_lottery_times = update_lottery_times.clone();
                    let update_task_list = update_task_list.clone();
                    spawn_local(async move {
                        match task::complete_task(&params).await {
                            Ok(_) => {
                                update_lottery_times.emit(());
                                update_task_list.emit(());
                            }
                            Err(e) => log::error!("领取任务奖励失败: {e}"),
                        }
                    });
                }
                TaskPresentStatus::Disabled => {
                    report(ReportData {
                        event_id: EVENT_TASK_DRAW,
                        event_sub_id: "actv_task_click",
                        event_sub_param: Some(activity_id.to_string()),
                        ext_json: Some(json!({
                            "actv_id": activity_id,
                            "actv_url": activity_full_url,
                        })),
                    });
                }
            }
        })
    };

    html! {
        <div class={classes!("section-task", styles::SECTION_CARD)}>
            <div class="section-title">
                <div class={styles::SECTION_TITLE}>
                    <span class="text-base font-semibold text-gray-900">{"做任务赢抽奖机会"}</span>
                    <InviteRecordEntry />
                </div>
            </div>
            <div class="section-content">
                { for info.task_list.iter().map(|entry| {
                    let (label, button_style) = task_button(entry.status);
                    let onclick = {
                        let handle_task_click = handle_task_click.clone();
                        let entry = entry.clone();
                        Callback::from(move |_: MouseEvent| handle_task_click.emit(entry.clone()))
                    };
                    html! {
                        <div key={entry.data.activity_task_id} class={styles::TASK_ROW}>
                            <div class="min-w-0 flex-1">
                                <div class={styles::TASK_NAME}>{&entry.name}</div>
                                if !entry.extra.is_empty() {
                                    <div class={styles::TASK_EXTRA}>{&entry.extra}</div>
                                }
                            </div>
                            if entry.reward_times > 0 {
                                <span class={styles::TASK_REWARD}>
                                    {format!("抽奖机会+{}", entry.reward_times)}
                                </span>
                            }
                            <button
                                class={classes!(styles::TASK_BUTTON, button_style)}
                                disabled={entry.status == TaskPresentStatus::Disabled}
                                {onclick}
                            >
                                {label}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
