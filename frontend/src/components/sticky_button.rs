use crate::styles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StickyButtonProps {
    pub text: String,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(StickyButton)]
pub fn sticky_button(props: &StickyButtonProps) -> Html {
    html! {
        <button class={styles::STICKY_BUTTON} onclick={props.onclick.clone()}>
            {&props.text}
        </button>
    }
}
