//! Ranked "more activities" cross-promotion list.

use crate::fb_api::DispatchActivityTaskArgs;
use crate::hooks::use_activity_info::use_activity_info;
use crate::install::on_env_handle_activity_task;
use crate::models::MoreActivityItem;
use crate::report::{report, ReportData, EVENT_TASK_DRAW};
use crate::styles;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(SectionMoreActivity)]
pub fn section_more_activity() -> Html {
    let info = use_activity_info();

    let Some(activity) = info.activity_info.clone() else {
        return html! {};
    };
    if activity.more_activity.is_empty() {
        return html! {};
    }

    let title = activity
        .more_title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "更多活动".to_string());

    let handle_click = {
        let activity_id = info.activity_id;
        let activity_full_url = info.activity_full_url.clone();
        Callback::from(move |item: MoreActivityItem| {
            report(ReportData {
                event_id: EVENT_TASK_DRAW,
                event_sub_id: "actv_advertising_click",
                event_sub_param: Some(item.activity_id.to_string()),
                ext_json: Some(json!({
                    "actv_id": activity_id,
                    "actv_url": activity_full_url,
                })),
            });
            let args = DispatchActivityTaskArgs {
                url: item.url.clone(),
                activity_id: Some(item.activity_id.to_string()),
                ..Default::default()
            };
            match serde_json::to_value(&args) {
                Ok(value) => spawn_local(on_env_handle_activity_task(value)),
                Err(e) => log::error!("serialize jump args failed: {e}"),
            }
        })
    };

    html! {
        <div class={classes!("section-more-activity", styles::SECTION_CARD)}>
            <div class="mb-2 text-base font-semibold text-gray-900">{title}</div>
            { for activity.more_activity.iter().map(|item| {
                let onclick = {
                    let handle_click = handle_click.clone();
                    let item = item.clone();
                    Callback::from(move |_: MouseEvent| handle_click.emit(item.clone()))
                };
                html! {
                    <div key={item.activity_id} class={styles::MORE_ACTIVITY_ROW} {onclick}>
                        if !item.img.is_empty() {
                            <img class={styles::MORE_ACTIVITY_IMG} src={item.img.clone()} alt={item.name.clone()} loading="lazy" />
                        }
                        <span class="min-w-0 flex-1 truncate text-sm text-gray-900">{&item.name}</span>
                        <span class="text-xs text-gray-400">{">"}</span>
                    </div>
                }
            }) }
        </div>
    }
}
