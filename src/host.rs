use fx_core::{FrameHost, FxError, FxResult};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type TimerCallback = Rc<RefCell<Option<Closure<dyn FnMut(JsValue)>>>>;

/// `requestAnimationFrame` / `setTimeout` for one effect. The effect installs
/// its frame and timer callbacks once; every request reuses them.
pub struct WebHost {
    window: web::Window,
    on_frame: FrameCallback,
    on_timer: TimerCallback,
}

impl WebHost {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            on_frame: Rc::new(RefCell::new(None)),
            on_timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_frame_callback(&self, cb: Closure<dyn FnMut()>) {
        *self.on_frame.borrow_mut() = Some(cb);
    }

    /// The callback receives the timer generation as its only argument.
    pub fn set_timer_callback(&self, cb: Closure<dyn FnMut(JsValue)>) {
        *self.on_timer.borrow_mut() = Some(cb);
    }
}

fn js_err(what: &str, e: JsValue) -> FxError {
    FxError::Schedule(format!("{}: {:?}", what, e))
}

impl FrameHost for WebHost {
    type FrameHandle = i32;
    type TimerHandle = i32;

    fn request_frame(&mut self) -> FxResult<i32> {
        let cb = self.on_frame.borrow();
        let cb = cb
            .as_ref()
            .ok_or_else(|| FxError::Schedule("no frame callback installed".into()))?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| js_err("requestAnimationFrame", e))
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }

    fn set_timer(&mut self, delay: Duration, generation: u64) -> FxResult<i32> {
        let cb = self.on_timer.borrow();
        let cb = cb
            .as_ref()
            .ok_or_else(|| FxError::Schedule("no timer callback installed".into()))?;
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_1(
                cb.as_ref().unchecked_ref(),
                delay.as_millis() as i32,
                &JsValue::from_f64(generation as f64),
            )
            .map_err(|e| js_err("setTimeout", e))
    }

    fn clear_timer(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}
