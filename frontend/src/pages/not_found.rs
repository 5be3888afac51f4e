use crate::styles;
use yew::prelude::*;

/// Terminal screen for fatal activity-load failures. The page degrades
/// here instead of crashing.
#[function_component(ActivityNotFound)]
pub fn activity_not_found() -> Html {
    html! {
        <div class={styles::NOT_FOUND}>
            <div class="text-5xl">{"🎁"}</div>
            <p class="mt-4 text-base">{"活动不存在或已结束"}</p>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={styles::NOT_FOUND}>
            <div class="text-5xl">{"404"}</div>
            <p class="mt-4 text-base">{"页面不存在"}</p>
        </div>
    }
}
