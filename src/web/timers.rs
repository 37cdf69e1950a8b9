use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::timer::{Timer, TimerHost};

/// `window.setTimeout` backed host. Each handle is remembered so `cancel_all` can
/// clear it; callbacks re-enter the thread-local controller through `fire`.
pub struct BrowserTimers {
    window: Window,
    handles: Vec<i32>,
}

impl BrowserTimers {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            handles: Vec::new(),
        }
    }
}

impl TimerHost for BrowserTimers {
    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn schedule(&mut self, delay_ms: u32, timer: Timer) {
        let callback = Closure::once_into_js(move || {
            super::with_controller(|c| c.fire(timer));
        });
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            Ok(handle) => self.handles.push(handle),
            Err(err) => log::warn!("setTimeout failed for {:?}: {:?}", timer.kind, err),
        }
    }

    fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
