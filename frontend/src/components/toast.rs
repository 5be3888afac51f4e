//! Degraded toast for contexts without the native toast bridge.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDivElement};

const HIDE_AFTER_MS: u32 = 2000;

/// One reusable, absolutely positioned toast node. Re-showing while a
/// previous toast is visible cancels its hide timer and restarts the
/// display window, so at most one toast is visible and the last call wins.
pub struct Toaster {
    node: Option<HtmlDivElement>,
    timer: Option<Timeout>,
}

impl Toaster {
    pub fn new() -> Self {
        Self { node: None, timer: None }
    }

    fn ensure_node(&mut self) -> Option<HtmlDivElement> {
        if self.node.is_none() {
            let document = window()?.document()?;
            let node: HtmlDivElement =
                document.create_element("div").ok()?.dyn_into().ok()?;
            let style = node.style();
            for (k, v) in [
                ("pointer-events", "none"),
                ("padding", "10px 20px"),
                ("background-color", "#1A2033f2"),
                ("color", "white"),
                ("position", "fixed"),
                ("border-radius", "10px"),
                ("opacity", "0"),
                ("font-weight", "500"),
                ("font-size", "14px"),
                ("transition", "opacity 0.3s"),
                ("left", "50%"),
                ("top", "50%"),
                ("z-index", "100"),
                ("width", "fit-content"),
                ("white-space", "break-spaces"),
                ("transform", "translate(-50%, -50%)"),
            ] {
                let _ = style.set_property(k, v);
            }
            document.body()?.append_child(&node).ok()?;
            self.node = Some(node);
        }
        self.node.clone()
    }

    pub fn show(&mut self, text: &str) {
        let Some(node) = self.ensure_node() else {
            return;
        };
        node.set_inner_html(&format!("<b>{text}</b>"));
        let _ = node.style().set_property("opacity", "1");

        // Dropping the previous Timeout cancels it: last call wins.
        let hide_node = node.clone();
        self.timer = Some(Timeout::new(HIDE_AFTER_MS, move || {
            let _ = hide_node.style().set_property("opacity", "0");
        }));
    }

    pub fn dispose(self) {
        drop(self.timer);
        if let Some(node) = self.node {
            node.remove();
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}
