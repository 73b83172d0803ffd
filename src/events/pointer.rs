use crate::constants::{MOVE_EVENTS, OPACITY_EVENTS};
use crate::fish::Fish;
use fx_core::{PointerInput, PointerSource};
use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn mouse_input(ev: &web::MouseEvent) -> PointerInput {
    PointerInput::Mouse(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

pub fn touch_input(ev: &web::TouchEvent) -> PointerInput {
    let touches = ev.touches();
    let contacts: SmallVec<[Vec2; 2]> = (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect();
    PointerInput::Touch(contacts)
}

/// Normalize whatever kind of move event this is.
pub fn event_input(ev: &web::Event) -> Option<PointerInput> {
    if let Some(touch) = ev.dyn_ref::<web::TouchEvent>() {
        return Some(touch_input(touch));
    }
    ev.dyn_ref::<web::MouseEvent>().map(mouse_input)
}

/// Feed window-level move events into the shared pointer source.
pub fn wire_pointer_source(window: &web::Window, pointer: Rc<RefCell<PointerSource>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some(input) = event_input(&ev) {
            pointer.borrow_mut().observe(&input);
        }
    }) as Box<dyn FnMut(_)>);

    for name in MOVE_EVENTS {
        _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Dim the fish over interactive elements.
pub fn wire_opacity(window: &web::Window, fish: Rc<RefCell<Fish>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let tag = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el.tag_name())
            .unwrap_or_default();
        fish.borrow_mut().point_at(&tag);
    }) as Box<dyn FnMut(_)>);

    for name in OPACITY_EVENTS {
        _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
