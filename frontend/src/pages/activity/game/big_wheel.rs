//! Wheel lottery: a fixed dial with a rotating arrow.

use super::{cancel_frame, request_frame, TargetResolver};
use shared::wheel_game::{WheelSpin, DEFAULT_SPIN_DURATION_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct WheelSegment {
    pub id: i64,
    pub name: String,
    pub image: String,
}

#[derive(Properties, PartialEq)]
pub struct BigWheelGameProps {
    pub segments: Vec<WheelSegment>,
    /// Resolves the winning slot (zero-based) via the server draw.
    pub resolve_target: TargetResolver,
    #[prop_or_default]
    pub on_spin_start: Callback<()>,
    #[prop_or_default]
    pub on_spin_complete: Callback<WheelSegment>,
    #[prop_or_default]
    pub on_progress: Callback<f64>,
    #[prop_or_default]
    pub on_spinning_click: Callback<()>,
    #[prop_or(true)]
    pub can_play: bool,
    #[prop_or_default]
    pub on_unavailable_click: Callback<()>,
    #[prop_or(DEFAULT_SPIN_DURATION_MS)]
    pub spin_duration_ms: f64,
    #[prop_or_default]
    pub background_image: String,
    #[prop_or_default]
    pub arrow_image: String,
    #[prop_or_default]
    pub on_error: Callback<String>,
}

#[function_component(BigWheelGame)]
pub fn big_wheel_game(props: &BigWheelGameProps) -> Html {
    let is_spinning = use_state(|| false);
    let rotation = use_state(|| 0.0f64);
    let raf_id = use_mut_ref(|| None::<i32>);
    let cancelled = use_mut_ref(|| false);

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

    let start_spin = {
        let segments = props.segments.clone();
        let resolve_target = props.resolve_target.clone();
        let is_spinning = is_spinning.clone();
        let rotation = rotation.clone();
        let on_spin_start = props.on_spin_start.clone();
        let on_spin_complete = props.on_spin_complete.clone();
        let on_progress = props.on_progress.clone();
        let on_error = props.on_error.clone();
        let duration = props.spin_duration_ms;
        let raf_id = raf_id.clone();
        let cancelled = cancelled.clone();

        Callback::from(move |_: ()| {
            if *is_spinning || segments.is_empty() {
                return;
            }
            is_spinning.set(true);
            on_spin_start.emit(());

            let segments = segments.clone();
            let resolve_target = resolve_target.clone();
            let is_spinning = is_spinning.clone();
            let rotation = rotation.clone();
            let on_spin_complete = on_spin_complete.clone();
            let on_progress = on_progress.clone();
            let on_error = on_error.clone();
            let raf_id = raf_id.clone();
            let cancelled = cancelled.clone();

            spawn_local(async move {
                let target = match resolve_target.resolve().await {
                    Ok(target) if target < segments.len() => target,
                    Ok(target) => {
                        log::error!("目标奖品索引越界: {target}");
                        is_spinning.set(false);
                        on_error.emit("获取目标奖品失败".to_string());
                        return;
                    }
                    Err(e) => {
                        log::error!("获取目标奖品失败: {e}");
                        is_spinning.set(false);
                        on_error.emit("获取目标奖品失败".to_string());
                        return;
                    }
                };

                // The engine takes the server's 1-based position.
                let mut spin = WheelSpin::new(
                    *rotation,
                    target + 1,
                    segments.len(),
                    duration,
                    js_sys::Date::now(),
                );
                let done = Cell::new(false);

                let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
                let g = f.clone();
                let raf_id_cb = raf_id.clone();
                *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    if *cancelled.borrow() || done.get() {
                        return;
                    }
                    let frame = spin.tick(js_sys::Date::now());
                    rotation.set(frame.rotation);
                    on_progress.emit(frame.progress);

                    if frame.finished {
                        done.set(true);
                        raf_id_cb.borrow_mut().take();
                        is_spinning.set(false);
                        on_spin_complete.emit(segments[target].clone());
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
        let is_spinning = is_spinning.clone();
        let on_spinning_click = props.on_spinning_click.clone();
        let on_unavailable_click = props.on_unavailable_click.clone();
        let start_spin = start_spin.clone();
        Callback::from(move |_: MouseEvent| {
            if !can_play {
                on_unavailable_click.emit(());
                return;
            }
            if *is_spinning {
                on_spinning_click.emit(());
            } else {
                start_spin.emit(());
            }
        })
    };

    let arrow_alt = if *is_spinning {
        "正在旋转"
    } else if props.can_play {
        "开始"
    } else {
        "不可用"
    };
    let wrapper_class = classes!(
        "relative",
        "z-10",
        "focus:outline-none",
        (!props.can_play).then_some("cursor-not-allowed opacity-70"),
    );

    html! {
        <div class="the-big-wheel-arrow-game relative h-[22.38rem] w-[22.38rem]">
            <img src={props.background_image.clone()} alt="game-bg" class="h-full w-full" />
            <div class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2">
                <div onclick={handle_button_click} class={wrapper_class}>
                    <img
                        src={props.arrow_image.clone()}
                        alt={arrow_alt}
                        class="pointer-events-none relative z-10 h-[8.18rem] w-[8.18rem]"
                        style={format!(
                            "transform: rotate({}deg); transform-origin: center 56.5%;",
                            *rotation
                        )}
                    />
                </div>
            </div>
        </div>
    }
}
