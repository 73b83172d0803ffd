use crate::constants::{IMG_STACK_ID, PROFILE_BACK_ID, TURBULENCE_ID};
use crate::dom;
use crate::host::WebHost;
use crate::surface::TurbulenceFilter;
use fx_core::{DistortionController, DistortionParams, FxError, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Liquify effect bound to `#imgStack` and its SVG filter.
pub struct Liquify {
    controller: DistortionController<WebHost>,
    host: WebHost,
    filter: TurbulenceFilter,
    region: web::Element,
}

impl Liquify {
    pub fn enter(&mut self, pointer: PointerState) {
        let rect = dom::element_rect(&self.region);
        self.controller.enter(&mut self.host, pointer, &rect);
    }

    pub fn track(&mut self, pointer: PointerState) {
        let rect = dom::element_rect(&self.region);
        self.controller.track(pointer, &rect);
    }

    pub fn leave(&mut self) {
        self.controller.leave(&mut self.host, &mut self.filter);
    }

    fn frame(&mut self) {
        self.controller.tick(&mut self.host, &mut self.filter);
    }

    fn stop_timer_fired(&mut self, generation: u64) {
        if self
            .controller
            .stop_timer_fired(&mut self.host, generation, &mut self.filter)
        {
            log::debug!("[liquify] idle");
        }
    }
}

/// Build the effect and hook its frame/timer callbacks. Fails if any of the
/// elements it needs is missing from the page.
pub fn install(
    window: &web::Window,
    document: &web::Document,
    params: DistortionParams,
) -> Result<(Rc<RefCell<Liquify>>, web::Element), FxError> {
    let region = dom::require_element(document, IMG_STACK_ID)?;
    let turbulence = dom::require_element(document, TURBULENCE_ID)?;
    dom::require_element(document, PROFILE_BACK_ID)?;

    let effect = Rc::new(RefCell::new(Liquify {
        controller: DistortionController::new(params),
        host: WebHost::new(window.clone()),
        filter: TurbulenceFilter::locate(turbulence),
        region: region.clone(),
    }));

    let frame_effect = effect.clone();
    effect
        .borrow()
        .host
        .set_frame_callback(Closure::wrap(Box::new(move || {
            frame_effect.borrow_mut().frame();
        }) as Box<dyn FnMut()>));

    let timer_effect = effect.clone();
    effect
        .borrow()
        .host
        .set_timer_callback(Closure::wrap(Box::new(move |generation: JsValue| {
            if let Some(g) = generation.as_f64() {
                timer_effect.borrow_mut().stop_timer_fired(g as u64);
            }
        }) as Box<dyn FnMut(JsValue)>));

    Ok((effect, region))
}

/// Leave the filter as a no-op. Used where the effect is disabled.
pub fn neutralize(document: &web::Document, params: DistortionParams) {
    let Ok(turbulence) = dom::require_element(document, TURBULENCE_ID) else {
        return;
    };
    let mut filter = TurbulenceFilter::locate(turbulence);
    DistortionController::<WebHost>::new(params).neutralize(&mut filter);
    log::info!("[liquify] disabled for this device");
}
