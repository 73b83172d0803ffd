use crate::constants::COARSE_POINTER_QUERY;
use fx_core::{DeviceProfile, ElementRect, FxError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Resolves once the document has been parsed.
pub async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    });
    wasm_bindgen_futures::JsFuture::from(ready)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

#[inline]
pub fn require_element(document: &web::Document, id: &'static str) -> Result<web::Element, FxError> {
    document
        .get_element_by_id(id)
        .ok_or(FxError::MissingTarget(id))
}

#[inline]
pub fn element_rect(el: &web::Element) -> ElementRect {
    let rect = el.get_bounding_client_rect();
    ElementRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (dim(window.inner_width()), dim(window.inner_height()))
}

pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Probe the device once at startup.
pub fn detect_profile(window: &web::Window) -> DeviceProfile {
    let touch =
        window.navigator().max_touch_points() > 0 || media_matches(window, COARSE_POINTER_QUERY);
    let (width, _) = viewport_size(window);
    DeviceProfile {
        touch,
        viewport_width: width,
    }
}
