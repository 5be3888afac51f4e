use crate::styles;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BottomSheetProps {
    pub title: String,
    pub visible: bool,
    pub on_close: Callback<()>,
    pub children: Html,
}

/// Bottom sheet chrome shared by the prize/rule/invite sheets.
#[function_component(BottomSheet)]
pub fn bottom_sheet(props: &BottomSheetProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            <div class={styles::SHEET_MASK} onclick={close.clone()} />
            <div class={styles::SHEET_BODY}>
                <div class={styles::SHEET_HEADER}>
                    <span class={styles::SHEET_TITLE}>{&props.title}</span>
                    <button class={styles::SHEET_CLOSE} onclick={close}>{"✕"}</button>
                </div>
                {props.children.clone()}
            </div>
        </>
    }
}
