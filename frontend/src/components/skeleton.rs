use crate::styles;
use yew::prelude::*;

/// Gray placeholder blocks shown while the activity data loads.
#[function_component(ActivitySkeleton)]
pub fn activity_skeleton() -> Html {
    html! {
        <div class="px-4 pt-4">
            <div class={classes!(styles::SKELETON_BLOCK, "h-[22.38rem]")} />
            <div class={classes!(styles::SKELETON_BLOCK, "h-40")} />
            <div class={classes!(styles::SKELETON_BLOCK, "h-24")} />
        </div>
    }
}
