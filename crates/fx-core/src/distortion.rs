//! Hover-driven image distortion ("liquify").
//!
//! Pointer proximity to the reference element's centre sets a target
//! intensity; a per-frame low-pass filter moves the current intensity toward
//! it; the current intensity drives two coupled filter parameters. Leaving
//! the element zeroes the target and arms a delayed stop so the decay can
//! play out before the loop is torn down.

use crate::config::DistortionParams;
use crate::error::FxResult;
use crate::pointer::PointerState;
use crate::scheduler::{FrameHost, RenderLoop};

/// Bounding client rect of the reference element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> PointerState {
        PointerState::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn contains(&self, p: PointerState) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

/// Proximity score in [0, 1]: 1 at the centre, 0 at or beyond the reach.
pub fn proximity(pointer: PointerState, rect: &ElementRect, reach_factor: f32) -> f32 {
    let max_distance = rect.width.max(rect.height) * reach_factor;
    if max_distance <= 0.0 {
        return 0.0;
    }
    let distance = pointer.as_vec2().distance(rect.center().as_vec2());
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}

/// Linear falloff from `max_intensity` at the centre to `min_intensity` at the reach.
pub fn target_intensity(pointer: PointerState, rect: &ElementRect, params: &DistortionParams) -> f32 {
    let norm = proximity(pointer, rect, params.reach_factor);
    params.min_intensity + (params.max_intensity - params.min_intensity) * norm
}

/// Values for the two coupled filter parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterOutput {
    /// feTurbulence baseFrequency (x, y)
    pub frequency: [f32; 2],
    /// feDisplacementMap scale
    pub displacement: f32,
}

impl FilterOutput {
    /// Filter is a no-op.
    pub const NEUTRAL: FilterOutput = FilterOutput {
        frequency: [0.0, 0.0],
        displacement: 0.0,
    };

    pub fn from_intensity(intensity: f32, params: &DistortionParams) -> Self {
        Self {
            frequency: [intensity, intensity * params.secondary_ratio],
            displacement: params.displacement_base + intensity * params.displacement_gain,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    pub fn base_frequency_attr(&self) -> String {
        if self.is_neutral() {
            return "0 0".to_string();
        }
        format!("{:.4} {:.4}", self.frequency[0], self.frequency[1])
    }

    pub fn scale_attr(&self) -> String {
        format!("{}", self.displacement.round() as i64)
    }
}

/// Output surface owned by the controller.
pub trait FilterSink {
    fn write_filter(&mut self, output: &FilterOutput) -> FxResult<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DistortionState {
    pub target_intensity: f32,
    pub current_intensity: f32,
    pub active: bool,
}

impl DistortionState {
    /// One low-pass step toward the target.
    #[inline]
    pub fn smooth(&mut self, decay_rate: f32) -> f32 {
        self.current_intensity += (self.target_intensity - self.current_intensity) * decay_rate;
        self.current_intensity
    }
}

struct PendingStop<T> {
    handle: T,
    generation: u64,
}

pub struct DistortionController<H: FrameHost> {
    params: DistortionParams,
    state: DistortionState,
    frames: RenderLoop<H::FrameHandle>,
    pending_stop: Option<PendingStop<H::TimerHandle>>,
    generation: u64,
}

impl<H: FrameHost> DistortionController<H> {
    pub fn new(params: DistortionParams) -> Self {
        Self {
            params,
            state: DistortionState::default(),
            frames: RenderLoop::new(),
            pending_stop: None,
            generation: 0,
        }
    }

    pub fn params(&self) -> &DistortionParams {
        &self.params
    }

    pub fn state(&self) -> &DistortionState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn is_hovering(&self) -> bool {
        self.state.active && self.pending_stop.is_none()
    }

    pub fn has_pending_stop(&self) -> bool {
        self.pending_stop.is_some()
    }

    /// Pointer entered the reference element.
    pub fn enter(&mut self, host: &mut H, pointer: PointerState, rect: &ElementRect) {
        // Cancel before anything else so an old stop cannot tear down the
        // state we are about to set up.
        self.cancel_pending_stop(host);
        if !self.state.active {
            self.state = DistortionState {
                target_intensity: self.params.start_intensity,
                current_intensity: 0.0,
                active: true,
            };
            log::debug!("[liquify] activated");
        }
        self.track(pointer, rect);
        self.frames.start(host);
    }

    /// Pointer moved while over the reference element.
    pub fn track(&mut self, pointer: PointerState, rect: &ElementRect) {
        if !self.is_hovering() {
            return;
        }
        self.state.target_intensity = target_intensity(pointer, rect, &self.params);
    }

    /// Pointer left the reference element.
    pub fn leave<S: FilterSink>(&mut self, host: &mut H, sink: &mut S) {
        if !self.state.active {
            return;
        }
        self.state.target_intensity = 0.0;
        self.cancel_pending_stop(host);
        self.generation += 1;
        match host.set_timer(self.params.stop_delay, self.generation) {
            Ok(handle) => {
                self.pending_stop = Some(PendingStop {
                    handle,
                    generation: self.generation,
                });
                log::trace!("[liquify] stop armed (gen {})", self.generation);
            }
            Err(e) => {
                // No timer means no grace period; the decay is cut short.
                log::warn!("[liquify] {}; stopping immediately", e);
                self.deactivate(host);
                self.neutralize(sink);
            }
        }
    }

    /// Frame callback body. Returns the output written, or `None` when the
    /// callback was stale.
    pub fn tick<S: FilterSink>(&mut self, host: &mut H, sink: &mut S) -> Option<FilterOutput> {
        if !self.frames.begin_frame() {
            return None;
        }
        let intensity = self.state.smooth(self.params.decay_rate);
        let output = FilterOutput::from_intensity(intensity, &self.params);
        if let Err(e) = sink.write_filter(&output) {
            log::debug!("[liquify] {}", e);
        }
        self.frames.reschedule(host);
        Some(output)
    }

    /// The delayed-stop timer fired. Timers from superseded generations are
    /// ignored. Returns whether the controller was torn down.
    pub fn stop_timer_fired<S: FilterSink>(
        &mut self,
        host: &mut H,
        generation: u64,
        sink: &mut S,
    ) -> bool {
        match &self.pending_stop {
            Some(p) if p.generation == generation => {}
            _ => {
                log::debug!("[liquify] ignoring stale stop (gen {})", generation);
                return false;
            }
        }
        self.pending_stop = None;
        self.deactivate(host);
        self.neutralize(sink);
        true
    }

    /// Force the filter to its no-op values.
    pub fn neutralize<S: FilterSink>(&mut self, sink: &mut S) {
        if let Err(e) = sink.write_filter(&FilterOutput::NEUTRAL) {
            log::debug!("[liquify] {}", e);
        }
    }

    fn deactivate(&mut self, host: &mut H) {
        self.frames.stop(host);
        self.state = DistortionState::default();
        log::debug!("[liquify] deactivated");
    }

    fn cancel_pending_stop(&mut self, host: &mut H) {
        if let Some(p) = self.pending_stop.take() {
            log::trace!("[liquify] cancelling stop (gen {})", p.generation);
            host.clear_timer(p.handle);
        }
    }
}
