#![cfg(target_arch = "wasm32")]
use fx_core::{Capabilities, EffectsConfig, PointerSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fish;
mod host;
mod liquify;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await?;

    let config = EffectsConfig::default();
    let profile = dom::detect_profile(&window);
    let caps = Capabilities::evaluate(profile, config.breakpoint_px);
    log::info!(
        "[caps] touch={} width={:.0} distortion={} follower={}",
        profile.touch,
        profile.viewport_width,
        caps.distortion,
        caps.follower
    );

    // One pointer source for the whole page; effects read copies of it.
    let (vw, vh) = dom::viewport_size(&window);
    let pointer = Rc::new(RefCell::new(PointerSource::centered(vw, vh)));
    events::wire_pointer_source(&window, pointer.clone());
    events::wire_resize_clamp(&window, pointer.clone(), config.edge_margin);

    if caps.distortion {
        match liquify::install(&window, &document, config.distortion) {
            Ok((liquify, region)) => {
                events::wire_hover(events::hover::HoverWiring {
                    region,
                    liquify,
                    pointer: pointer.clone(),
                });
                log::info!("[liquify] ready");
            }
            Err(e) => log::info!("[liquify] skipped: {}", e),
        }
    } else {
        liquify::neutralize(&document, config.distortion);
    }

    match fish::install(&window, &document, config.follower, pointer.clone()) {
        Ok(fish) => {
            fish.borrow_mut().apply_capability(caps.follower);
            if !profile.touch {
                events::wire_opacity(&window, fish.clone());
                events::wire_breakpoint(&window, fish, profile, config.breakpoint_px);
            }
        }
        Err(e) => log::info!("[fish] skipped: {}", e),
    }

    Ok(())
}
