//! Root font-size scaling for the mobile viewport.

use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

const DESIGN_WIDTH: f64 = 390.0;
const BASE_FONT_SIZE: f64 = 16.0;
const MAX_WIDTH: f64 = 430.0;
const MIN_WIDTH: f64 = 375.0;

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

fn apply_rem() {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let client_width = (html.client_width() as f64).clamp(MIN_WIDTH, MAX_WIDTH);
    let scale = client_width / DESIGN_WIDTH;
    let _ = html
        .style()
        .set_property("font-size", &format!("{}px", BASE_FONT_SIZE * scale));
}

/// Installs the rem scaling once per page; later calls are no-ops. The
/// resize listener lives for the rest of the page.
pub fn set_rem() {
    if INSTALLED.with(|i| i.replace(true)) {
        return;
    }
    apply_rem();
    if let Some(window) = window() {
        gloo::events::EventListener::new(&window, "resize", |_| apply_rem()).forget();
    }
}
