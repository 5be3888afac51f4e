//! Eight-slot grid lottery.

use super::{cancel_frame, request_frame, TargetResolver};
use shared::pager_game::{PagerDraw, DEFAULT_DRAW_DURATION_MS, PAGER_ITEM_COUNT};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PagerItem {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub display: bool,
}

#[derive(Properties, PartialEq)]
pub struct SquaredPagerGameProps {
    pub items: Vec<PagerItem>,
    pub resolve_target: TargetResolver,
    #[prop_or_default]
    pub on_draw_start: Callback<()>,
    #[prop_or_default]
    pub on_draw_complete: Callback<PagerItem>,
    #[prop_or_default]
    pub on_progress: Callback<f64>,
    #[prop_or_default]
    pub on_drawing_click: Callback<()>,
    #[prop_or(true)]
    pub can_play: bool,
    #[prop_or_default]
    pub on_unavailable_click: Callback<()>,
    #[prop_or(DEFAULT_DRAW_DURATION_MS)]
    pub draw_duration_ms: f64,
    #[prop_or_default]
    pub background_image: String,
    #[prop_or_default]
    pub start_button_image: String,
    #[prop_or_default]
    pub on_error: Callback<String>,
}

#[function_component(SquaredPagerGame)]
pub fn squared_pager_game(props: &SquaredPagerGameProps) -> Html {
    let is_drawing = use_state(|| false);
    let current_index = use_state(|| None::<usize>);
    let target_index = use_state(|| None::<usize>);
    let raf_id = use_mut_ref(|| None::<i32>);
    let cancelled = use_mut_ref(|| false);

    {
        let on_error = props.on_error.clone();
        let len = props.items.len();
        use_effect_with(len, move |len| {
            if *len != PAGER_ITEM_COUNT {
                log::error!("SquaredPagerGame: 必须提供恰好{PAGER_ITEM_COUNT}个奖品");
                on_error.emit("奖品数量不正确".to_string());
            }
            || ()
        });
    }

    // Teardown mid-animation cancels the frame loop without completing.
    {
        let raf_id = raf_id.clone();
        let cancelled = cancelled.clone();
        use_effect_with((), move |_| {
            move || {
                *cancelled.borrow_mut() = true;
                if let Some(id) = raf_id.borrow_mut().take() {
                    cancel_frame(id);
                }
            }
        });
    }

    let start_draw = {
        let items = props.items.clone();
        let resolve_target = props.resolve_target.clone();
        let is_drawing = is_drawing.clone();
        let current_index = current_index.clone();
        let target_index = target_index.clone();
        let on_draw_start = props.on_draw_start.clone();
        let on_draw_complete = props.on_draw_complete.clone();
        let on_progress = props.on_progress.clone();
        let on_error = props.on_error.clone();
        let duration = props.draw_duration_ms;
        let raf_id = raf_id.clone();
        let cancelled = cancelled.clone();

        Callback::from(move |_: ()| {
            if *is_drawing || items.is_empty() {
                return;
            }
            is_drawing.set(true);
            on_draw_start.emit(());

            let items = items.clone();
            let resolve_target = resolve_target.clone();
            let is_drawing = is_drawing.clone();
            let current_index = current_index.clone();
            let target_index = target_index.clone();
            let on_draw_complete = on_draw_complete.clone();
            let on_progress = on_progress.clone();
            let on_error = on_error.clone();
            let raf_id = raf_id.clone();
            let cancelled = cancelled.clone();

            spawn_local(async move {
                let target = match resolve_target.resolve().await {
                    Ok(target) if target < items.len() => target,
                    Ok(target) => {
                        // The server's prize id must map into our prize
                        // list; an out-of-range slot is a contract breach.
                        log::error!("目标奖品索引越界: {target}");
                        is_drawing.set(false);
                        on_error.emit("获取目标奖品失败".to_string());
                        return;
                    }
                    Err(e) => {
                        log::error!("获取目标奖品失败: {e}");
                        is_drawing.set(false);
                        on_error.emit("获取目标奖品失败".to_string());
                        return;
                    }
                };

                let mut draw =
                    PagerDraw::new(target, items.len(), duration, js_sys::Date::now());
                let done = Cell::new(false);

                let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
                let g = f.clone();
                let raf_id_cb = raf_id.clone();
                *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    if *cancelled.borrow() || done.get() {
                        return;
                    }
                    let frame = draw.tick(js_sys::Date::now());
                    current_index.set(Some(frame.index));
                    on_progress.emit(frame.progress);

                    if frame.finished {
                        done.set(true);
                        raf_id_cb.borrow_mut().take();
                        target_index.set(Some(draw.target()));
                        is_drawing.set(false);
                        on_draw_complete.emit(items[draw.target()].clone());
                    } else {
                        *raf_id_cb.borrow_mut() =
                            request_frame(f.borrow().as_ref().expect("frame closure set"));
                    }
                }) as Box<dyn FnMut()>));

                let first = request_frame(g.borrow().as_ref().expect("frame closure set"));
                *raf_id.borrow_mut() = first;
            });
        })
    };

    let handle_button_click = {
        let can_play = props.can_play;
        let is_drawing = is_drawing.clone();
        let on_drawing_click = props.on_drawing_click.clone();
        let on_unavailable_click = props.on_unavailable_click.clone();
        let start_draw = start_draw.clone();
        Callback::from(move |_: MouseEvent| {
            if !can_play {
                on_unavailable_click.emit(());
                return;
            }
            if *is_drawing {
                on_drawing_click.emit(());
            } else {
                start_draw.emit(());
            }
        })
    };

    let render_item = |item: &PagerItem, index: usize| -> Html {
        let running = *is_drawing && *current_index == Some(index);
        let winning = !*is_drawing && *target_index == Some(index) && current_index.is_some();
        let class = classes!(
            "flex",
            "h-full",
            "w-full",
            "items-center",
            "justify-center",
            "overflow-hidden",
            "rounded-lg",
            running.then_some("ring-2 ring-yellow-400 bg-yellow-50"),
            winning.then_some("ring-2 ring-orange-500 bg-orange-50"),
        );
        html! {
            <div key={item.id} class={class}>
                <div class="flex h-full w-full items-center justify-center rounded-xl bg-white/80">
                    if item.display && !item.image.is_empty() {
                        <img
                            src={item.image.clone()}
                            loading="lazy"
                            alt={item.name.clone()}
                            class="pointer-events-none h-full w-full select-none object-contain"
                        />
                    }
                </div>
            </div>
        }
    };

    let grid = if props.items.len() != PAGER_ITEM_COUNT {
        // Degraded placeholder ring: the fault is recoverable presentation,
        // not a page crash.
        (0..PAGER_ITEM_COUNT)
            .map(|i| {
                html! {
                    <div key={i} class="flex h-full w-full items-center justify-center rounded-xl bg-white/80">
                        <span class="text-center text-gray-500">{"错误"}</span>
                    </div>
                }
            })
            .collect::<Html>()
    } else {
        let items = &props.items;
        let button_class = classes!(
            "flex",
            "h-full",
            "w-full",
            "cursor-pointer",
            "items-center",
            "justify-center",
            (!props.can_play).then_some("cursor-not-allowed opacity-70"),
        );
        html! {
            <>
                { for items[0..3].iter().enumerate().map(|(i, item)| render_item(item, i)) }
                { render_item(&items[7], 7) }
                <div onclick={handle_button_click} class={button_class}>
                    <img
                        src={props.start_button_image.clone()}
                        alt={if *is_drawing { "抽奖中" } else { "开始抽奖" }}
                        class="pointer-events-none h-full w-full select-none object-contain"
                    />
                </div>
                { render_item(&items[3], 3) }
                { for (4..7).rev().map(|i| render_item(&items[i], i)) }
            </>
        }
    };

    html! {
        <div class="squared-pager-game relative h-[22.38rem] w-[22.38rem]">
            <img
                src={props.background_image.clone()}
                alt="游戏背景"
                class="pointer-events-none absolute h-full w-full select-none object-cover"
                loading="lazy"
            />
            <div class="absolute inset-4 grid grid-cols-3 grid-rows-3 gap-[0.44rem]">{grid}</div>
        </div>
    }
}
