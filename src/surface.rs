// Output surfaces: SVG filter attributes and the fish sprite's inline style.

use crate::constants::DISPLACEMENT_SELECTOR;
use fx_core::{FilterOutput, FilterSink, FxError, FxResult, SpriteSink, SpriteTransform};
use wasm_bindgen::JsValue;
use web_sys as web;

fn rejected(target: &'static str) -> impl Fn(JsValue) -> FxError {
    move |e| FxError::UnsupportedWrite {
        target,
        reason: format!("{:?}", e),
    }
}

/// `feTurbulence` plus the `feDisplacementMap` sharing its `<filter>`.
pub struct TurbulenceFilter {
    turbulence: web::Element,
    displacement: Option<web::Element>,
}

impl TurbulenceFilter {
    pub fn locate(turbulence: web::Element) -> Self {
        let displacement = turbulence
            .parent_element()
            .and_then(|filter| filter.query_selector(DISPLACEMENT_SELECTOR).ok().flatten());
        if displacement.is_none() {
            log::info!("[liquify] no {} next to turbulence", DISPLACEMENT_SELECTOR);
        }
        Self {
            turbulence,
            displacement,
        }
    }
}

impl FilterSink for TurbulenceFilter {
    fn write_filter(&mut self, output: &FilterOutput) -> FxResult<()> {
        self.turbulence
            .set_attribute("baseFrequency", &output.base_frequency_attr())
            .map_err(rejected("feTurbulence"))?;
        if let Some(disp) = &self.displacement {
            disp.set_attribute("scale", &output.scale_attr())
                .map_err(rejected("feDisplacementMap"))?;
        }
        Ok(())
    }
}

pub struct FishSprite {
    el: web::HtmlElement,
}

impl FishSprite {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }

    fn set(&self, prop: &str, value: &str) -> FxResult<()> {
        self.el
            .style()
            .set_property(prop, value)
            .map_err(rejected("fish"))
    }
}

impl SpriteSink for FishSprite {
    fn write_transform(&mut self, t: &SpriteTransform) -> FxResult<()> {
        self.set("left", &format!("{:.2}px", t.position.x))?;
        self.set("top", &format!("{:.2}px", t.position.y))?;
        self.set("transform", &t.css_transform())
    }

    fn write_opacity(&mut self, opacity: f32) -> FxResult<()> {
        self.set("opacity", &format!("{}", opacity))
    }

    fn set_visible(&mut self, visible: bool) -> FxResult<()> {
        self.set("visibility", if visible { "visible" } else { "hidden" })
    }
}
