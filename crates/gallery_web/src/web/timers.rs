use std::time::Duration;

use gallery::Timers;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `window.setTimeout`-backed one-shot actions.
#[derive(Clone, Copy, Default)]
pub(super) struct WindowTimers;

impl Timers for WindowTimers {
    fn schedule(&self, delay: Duration, action: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            tracing::error!("no window; deferred action dropped");
            return;
        };
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        // Frees itself after the single call.
        let cb = Closure::once_into_js(move || action());
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
            .is_err()
        {
            tracing::error!(ms, "setTimeout threw; deferred action dropped");
        }
    }
}
