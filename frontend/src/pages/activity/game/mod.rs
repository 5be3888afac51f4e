pub mod big_wheel;
pub mod squared_pager;

use futures::future::LocalBoxFuture;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Async resolver the caller supplies: performs the actual server draw and
/// returns the decided slot. The animation is presentation over that
/// already-decided outcome and never influences it.
#[derive(Clone)]
pub struct TargetResolver(Rc<dyn Fn() -> LocalBoxFuture<'static, Result<usize, String>>>);

impl TargetResolver {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<usize, String>> + 'static,
    {
        Self(Rc::new(move || {
            Box::pin(f()) as LocalBoxFuture<'static, Result<usize, String>>
        }))
    }

    pub fn resolve(&self) -> LocalBoxFuture<'static, Result<usize, String>> {
        (self.0)()
    }
}

impl PartialEq for TargetResolver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub(crate) fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub(crate) fn cancel_frame(id: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(id);
    }
}
