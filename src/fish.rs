use crate::constants::FISH_ID;
use crate::dom;
use crate::host::WebHost;
use crate::surface::FishSprite;
use fx_core::{Follower, FollowerParams, FxError, PointerSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The cursor-following fish.
pub struct Fish {
    follower: Follower<WebHost>,
    host: WebHost,
    sprite: FishSprite,
    pointer: Rc<RefCell<PointerSource>>,
}

impl Fish {
    pub fn point_at(&mut self, tag: &str) {
        self.follower.point_at(tag, &mut self.sprite);
    }

    pub fn apply_capability(&mut self, enabled: bool) {
        self.follower
            .apply_capability(enabled, &mut self.host, &mut self.sprite);
        log::info!("[fish] enabled={}", enabled);
    }

    fn frame(&mut self) {
        let pointer = self.pointer.borrow().current();
        self.follower.tick(&mut self.host, pointer, &mut self.sprite);
    }
}

pub fn install(
    window: &web::Window,
    document: &web::Document,
    params: FollowerParams,
    pointer: Rc<RefCell<PointerSource>>,
) -> Result<Rc<RefCell<Fish>>, FxError> {
    let el = dom::require_element(document, FISH_ID)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| FxError::MissingTarget(FISH_ID))?;

    let origin = pointer.borrow().current();
    let effect = Rc::new(RefCell::new(Fish {
        follower: Follower::new(origin, params),
        host: WebHost::new(window.clone()),
        sprite: FishSprite::new(el),
        pointer,
    }));

    let frame_effect = effect.clone();
    effect
        .borrow()
        .host
        .set_frame_callback(Closure::wrap(Box::new(move || {
            frame_effect.borrow_mut().frame();
        }) as Box<dyn FnMut()>));

    Ok(effect)
}
