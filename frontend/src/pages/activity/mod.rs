mod game;
mod invite_record;
mod section_game;
mod section_more;
mod section_sticky;
mod section_task;

use crate::components::{ActivitySkeleton, UpgradePrompt};
use crate::hooks::use_activity_info::{use_activity_info, ActivityInfoProvider};
use crate::hooks::use_open_install::use_open_install;
use crate::pages::not_found::ActivityNotFound;
use crate::report::{report, ReportData, EVENT_TASK_DRAW};
use crate::screen;
use crate::styles;
use crate::ua;
use section_game::SectionGame;
use section_more::SectionMoreActivity;
use section_sticky::SectionStickyButton;
use section_task::SectionTask;
use serde_json::json;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityPageProps {
    pub id: u64,
}

#[function_component(ActivityPage)]
pub fn activity_page(props: &ActivityPageProps) -> Html {
    html! {
        <ActivityInfoProvider activity_id={props.id}>
            <ActivityView />
        </ActivityInfoProvider>
    }
}

/// Section order is a server hint: 2 puts the task list above the game,
/// anything else leads with the game.
const PRIORITY_TASK_FIRST: i32 = 2;

#[function_component(ActivityView)]
fn activity_view() -> Html {
    let info = use_activity_info();

    // The install fallback only makes sense outside the host app.
    let _open_install = use_open_install(!ua::in_fanbook());

    {
        let activity_id = info.activity_id;
        let activity_full_url = info.activity_full_url.clone();
        use_effect_with((), move |_| {
            screen::set_rem();
            report(ReportData {
                event_id: EVENT_TASK_DRAW,
                event_sub_id: "actv_enter",
                event_sub_param: Some(activity_id.to_string()),
                ext_json: Some(json!({
                    "actv_id": activity_id,
                    "actv_url": activity_full_url,
                })),
            });
            || ()
        });
    }

    let Some(activity) = info.activity_info.clone() else {
        if info.loading {
            return html! { <ActivitySkeleton /> };
        }
        return html! { <ActivityNotFound /> };
    };

    let mut style = String::new();
    if !activity.bg_img_color.is_empty() {
        style.push_str(&format!("background-color: {};", activity.bg_img_color));
    }
    if !activity.header_img.is_empty() {
        style.push_str(&format!("background-image: url({});", activity.header_img));
    }

    let task_first = activity.priority == PRIORITY_TASK_FIRST;

    html! {
        <div class={styles::PAGE} {style}>
            if task_first {
                <SectionTask />
                <SectionGame />
            } else {
                <SectionGame />
                <SectionTask />
            }
            <SectionMoreActivity />
            <SectionStickyButton />
            <UpgradePrompt />
        </div>
    }
}
