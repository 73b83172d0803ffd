use crate::constants::narrow_viewport_query;
use crate::dom;
use crate::fish::Fish;
use fx_core::{follower_allowed, DeviceProfile, PointerSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the pointer target on screen when the window shrinks.
pub fn wire_resize_clamp(window: &web::Window, pointer: Rc<RefCell<PointerSource>>, margin: f32) {
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::viewport_size(&wnd);
        pointer.borrow_mut().clamp_to_viewport(w, h, margin);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Re-evaluate the follower whenever the viewport crosses the breakpoint.
/// Touch capability was decided at startup and is not re-probed here.
pub fn wire_breakpoint(
    window: &web::Window,
    fish: Rc<RefCell<Fish>>,
    profile: DeviceProfile,
    breakpoint_px: f32,
) {
    let query = narrow_viewport_query(breakpoint_px);
    let mql = match window.match_media(&query) {
        Ok(Some(mql)) => mql,
        _ => {
            log::info!("[fish] matchMedia unavailable; breakpoint fixed at startup");
            return;
        }
    };
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (width, _) = dom::viewport_size(&wnd);
        let now = DeviceProfile {
            viewport_width: width,
            ..profile
        };
        fish.borrow_mut()
            .apply_capability(follower_allowed(now, breakpoint_px));
    }) as Box<dyn FnMut()>);
    _ = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
