//! Single source of truth for one activity page visit: operating mode,
//! activity detail, task list and remaining draws.

use crate::api::{activity, task, user};
use crate::auth;
use crate::models::{ActivityDetail, TaskItem};
use crate::ua;
use shared::mode::{fetch_plan, resolve_mode, ActivityMode};
use shared::task::{display_name, present_status, progress_text, TaskPresentStatus};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

/// Presentation record for one task row.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskEntry {
    pub name: String,
    pub extra: String,
    pub status: TaskPresentStatus,
    pub reward_times: i64,
    pub data: TaskItem,
}

fn map_task_list(items: Vec<TaskItem>) -> Vec<TaskEntry> {
    items
        .into_iter()
        .map(|item| TaskEntry {
            name: display_name(&item.name, item.task_refresh_time),
            extra: progress_text(item.status, item.progress, item.condition_number),
            status: present_status(item.status),
            reward_times: item.reward_number,
            data: item,
        })
        .collect()
}

#[derive(Clone, PartialEq)]
pub struct ActivityInfoHandle {
    pub activity_id: u64,
    pub activity_url_path: String,
    pub activity_full_url: String,
    pub mode: ActivityMode,
    pub activity_info: Option<Rc<ActivityDetail>>,
    pub task_list: Rc<Vec<TaskEntry>>,
    pub lottery_times: i64,
    pub loading: bool,
    pub error: Option<String>,
    pub refresh: Callback<()>,
    pub update_lottery_times: Callback<()>,
    pub update_task_list: Callback<()>,
    pub set_mode: Callback<ActivityMode>,
}

#[derive(Properties, PartialEq)]
pub struct ActivityInfoProviderProps {
    pub activity_id: u64,
    pub children: Html,
}

#[allow(clippy::too_many_arguments)]
fn fetch_activity_data(
    activity_id: u64,
    mode: ActivityMode,
    activity_info: UseStateHandle<Option<Rc<ActivityDetail>>>,
    task_list: UseStateHandle<Rc<Vec<TaskEntry>>>,
    lottery_times: UseStateHandle<i64>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    data_loaded: Rc<RefCell<bool>>,
    in_flight: Rc<RefCell<bool>>,
) {
    // The latch makes the fetch idempotent under re-render and keeps at
    // most one sequence in flight; `refresh` re-arms it.
    if *data_loaded.borrow() || *in_flight.borrow() {
        return;
    }
    *in_flight.borrow_mut() = true;

    spawn_local(async move {
        loading.set(true);
        let plan = fetch_plan(mode, activity_id);

        let result = async {
            let detail = activity::get_activity_detail(mode, activity_id).await?;
            if !detail.name.is_empty() {
                if let Some(document) = window().and_then(|w| w.document()) {
                    document.set_title(&detail.name);
                }
            }
            activity_info.set(Some(Rc::new(detail)));

            let tasks = task::get_task_list(mode, activity_id).await?;
            task_list.set(Rc::new(map_task_list(tasks)));

            if plan.fetch_lottery_times {
                let participation = user::get_user_activity_participation(activity_id).await?;
                lottery_times.set(participation.remain_total);
            }
            Ok::<(), shared::envelope::ApiError>(())
        }
        .await;

        match result {
            Ok(()) => {
                *data_loaded.borrow_mut() = true;
                error.set(None);
            }
            Err(e) => {
                log::error!("获取活动数据失败: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
        *in_flight.borrow_mut() = false;
    });
}

#[function_component(ActivityInfoProvider)]
pub fn activity_info_provider(props: &ActivityInfoProviderProps) -> Html {
    // Mode is resolved synchronously, before any request goes out, so a
    // preview-carried token is persisted ahead of the first signature.
    let mode = use_state(|| {
        let resolution = resolve_mode(
            auth::get_preview_parameter().as_deref(),
            auth::get_token().as_deref(),
            ua::in_fanbook(),
        );
        if let Some(token) = &resolution.adopt_token {
            auth::set_token(token);
        }
        resolution.mode
    });

    let activity_info = use_state(|| None::<Rc<ActivityDetail>>);
    let task_list = use_state(|| Rc::new(Vec::<TaskEntry>::new()));
    let lottery_times = use_state(|| 0i64);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let data_loaded = use_mut_ref(|| false);
    let in_flight = use_mut_ref(|| false);

    {
        let activity_info = activity_info.clone();
        let task_list = task_list.clone();
        let lottery_times = lottery_times.clone();
        let loading = loading.clone();
        let error = error.clone();
        let data_loaded = data_loaded.clone();
        let in_flight = in_flight.clone();
        use_effect_with((props.activity_id, *mode), move |(activity_id, mode)| {
            fetch_activity_data(
                *activity_id,
                *mode,
                activity_info,
                task_list,
                lottery_times,
                loading,
                error,
                data_loaded,
                in_flight,
            );
            || ()
        });
    }

    let refresh = {
        let activity_id = props.activity_id;
        let mode = mode.clone();
        let activity_info = activity_info.clone();
        let task_list = task_list.clone();
        let lottery_times = lottery_times.clone();
        let loading = loading.clone();
        let error = error.clone();
        let data_loaded = data_loaded.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |_| {
            *data_loaded.borrow_mut() = false;
            fetch_activity_data(
                activity_id,
                *mode,
                activity_info.clone(),
                task_list.clone(),
                lottery_times.clone(),
                loading.clone(),
                error.clone(),
                data_loaded.clone(),
                in_flight.clone(),
            );
        })
    };

    let update_lottery_times = {
        let activity_id = props.activity_id;
        let mode = mode.clone();
        let lottery_times = lottery_times.clone();
        Callback::from(move |_| {
            if *mode != ActivityMode::Normal {
                return;
            }
            let lottery_times = lottery_times.clone();
            spawn_local(async move {
                match user::get_user_activity_participation(activity_id).await {
                    Ok(participation) => lottery_times.set(participation.remain_total),
                    Err(e) => log::error!("更新抽奖次数失败: {e}"),
                }
            });
        })
    };

    let update_task_list = {
        let activity_id = props.activity_id;
        let mode = mode.clone();
        let task_list = task_list.clone();
        Callback::from(move |_| {
            let mode = *mode;
            let task_list = task_list.clone();
            spawn_local(async move {
                match task::get_task_list(mode, activity_id).await {
                    Ok(items) => task_list.set(Rc::new(map_task_list(items))),
                    Err(e) => log::error!("更新任务列表失败: {e}"),
                }
            });
        })
    };

    let set_mode = {
        let mode = mode.clone();
        Callback::from(move |next: ActivityMode| mode.set(next))
    };

    let activity_url_path = format!("/activity/{}", props.activity_id);
    let activity_full_url = window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{origin}{activity_url_path}"))
        .unwrap_or_else(|| activity_url_path.clone());

    let handle = ActivityInfoHandle {
        activity_id: props.activity_id,
        activity_url_path,
        activity_full_url,
        mode: *mode,
        activity_info: (*activity_info).clone(),
        task_list: (*task_list).clone(),
        lottery_times: *lottery_times,
        loading: *loading,
        error: (*error).clone(),
        refresh,
        update_lottery_times,
        update_task_list,
        set_mode,
    };

    html! {
        <ContextProvider<ActivityInfoHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ActivityInfoHandle>>
    }
}

#[hook]
pub fn use_activity_info() -> ActivityInfoHandle {
    use_context::<ActivityInfoHandle>()
        .expect("use_activity_info must be used inside ActivityInfoProvider")
}
