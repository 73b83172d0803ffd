use crate::liquify::Liquify;
use fx_core::PointerSource;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::pointer::mouse_input;

#[derive(Clone)]
pub struct HoverWiring {
    pub region: web::Element,
    pub liquify: Rc<RefCell<Liquify>>,
    pub pointer: Rc<RefCell<PointerSource>>,
}

pub fn wire_hover(w: HoverWiring) {
    wire_mouseenter(&w);
    wire_mousemove(&w);
    wire_mouseleave(&w);
}

fn wire_mouseenter(w: &HoverWiring) {
    let w = w.clone();
    let region = w.region.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pointer = {
            let mut src = w.pointer.borrow_mut();
            src.observe(&mouse_input(&ev));
            src.current()
        };
        w.liquify.borrow_mut().enter(pointer);
    }) as Box<dyn FnMut(_)>);
    _ = region.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &HoverWiring) {
    let w = w.clone();
    let region = w.region.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pointer = {
            let mut src = w.pointer.borrow_mut();
            src.observe(&mouse_input(&ev));
            src.current()
        };
        w.liquify.borrow_mut().track(pointer);
    }) as Box<dyn FnMut(_)>);
    _ = region.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &HoverWiring) {
    let w = w.clone();
    let region = w.region.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.liquify.borrow_mut().leave();
    }) as Box<dyn FnMut(_)>);
    _ = region.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
