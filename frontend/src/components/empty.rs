use crate::styles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyProps {
    #[prop_or("暂无数据".to_string())]
    pub text: String,
}

#[function_component(Empty)]
pub fn empty(props: &EmptyProps) -> Html {
    html! {
        <div class={styles::EMPTY}>
            <span>{&props.text}</span>
        </div>
    }
}
