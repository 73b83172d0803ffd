//! Damped cursor follower ("fish").
//!
//! A first-order low-pass filter on the pointer position. Velocity is the
//! frame-to-frame delta of the filtered position, so it carries the same lag
//! and the sprite turns and stretches smoothly instead of snapping.

use crate::config::FollowerParams;
use crate::constants::{DIMMED_OPACITY, FULL_OPACITY, INTERACTIVE_TAGS};
use crate::error::FxResult;
use crate::pointer::PointerState;
use crate::scheduler::{FrameHost, RenderLoop};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerState {
    pub position: Vec2,
    pub last_position: Vec2,
    pub velocity: Vec2,
}

impl FollowerState {
    /// At rest on `origin`.
    pub fn at(origin: Vec2) -> Self {
        Self {
            position: origin,
            last_position: origin,
            velocity: Vec2::ZERO,
        }
    }

    /// One frame of smoothing toward `target`.
    pub fn advance(&mut self, target: Vec2, params: &FollowerParams) -> SpriteTransform {
        self.position += (target - self.position) * params.ease;
        self.velocity = self.position - self.last_position;
        self.last_position = self.position;
        SpriteTransform {
            position: self.position,
            angle_deg: heading_deg(self.velocity),
            scale: speed_scale(self.velocity, params),
        }
    }
}

/// Where and how to draw the sprite for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteTransform {
    pub position: Vec2,
    pub angle_deg: f32,
    pub scale: f32,
}

impl SpriteTransform {
    /// CSS `transform` value; the sprite is centred on `position`.
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) rotate({:.2}deg) scale({:.4})",
            self.angle_deg, self.scale
        )
    }
}

#[inline]
pub fn heading_deg(velocity: Vec2) -> f32 {
    velocity.y.atan2(velocity.x).to_degrees()
}

/// `1 + min(cap, |v| * gain) * scale_gain`; never above `params.max_scale()`.
#[inline]
pub fn speed_scale(velocity: Vec2, params: &FollowerParams) -> f32 {
    let speed = (velocity.length() * params.speed_gain).min(params.speed_cap);
    1.0 + speed * params.scale_gain
}

/// Sprite opacity for a pointer over an element with the given tag name.
pub fn opacity_for_tag(tag: &str) -> f32 {
    if INTERACTIVE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        DIMMED_OPACITY
    } else {
        FULL_OPACITY
    }
}

/// Output surface owned by the follower.
pub trait SpriteSink {
    fn write_transform(&mut self, transform: &SpriteTransform) -> FxResult<()>;
    fn write_opacity(&mut self, opacity: f32) -> FxResult<()>;
    fn set_visible(&mut self, visible: bool) -> FxResult<()>;
}

pub struct Follower<H: FrameHost> {
    params: FollowerParams,
    state: FollowerState,
    frames: RenderLoop<H::FrameHandle>,
    visible: bool,
}

impl<H: FrameHost> Follower<H> {
    pub fn new(origin: PointerState, params: FollowerParams) -> Self {
        Self {
            params,
            state: FollowerState::at(origin.as_vec2()),
            frames: RenderLoop::new(),
            visible: true,
        }
    }

    pub fn params(&self) -> &FollowerParams {
        &self.params
    }

    pub fn state(&self) -> &FollowerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn start(&mut self, host: &mut H) -> bool {
        self.frames.start(host)
    }

    pub fn stop(&mut self, host: &mut H) -> bool {
        self.frames.stop(host)
    }

    /// Frame callback body. Returns the transform written, or `None` when the
    /// callback was stale.
    pub fn tick<S: SpriteSink>(
        &mut self,
        host: &mut H,
        pointer: PointerState,
        sink: &mut S,
    ) -> Option<SpriteTransform> {
        if !self.frames.begin_frame() {
            return None;
        }
        let transform = self.state.advance(pointer.as_vec2(), &self.params);
        if let Err(e) = sink.write_transform(&transform) {
            log::debug!("[fish] {}", e);
        }
        self.frames.reschedule(host);
        Some(transform)
    }

    /// Opacity side channel, keyed off the element under the pointer.
    pub fn point_at<S: SpriteSink>(&mut self, tag: &str, sink: &mut S) -> f32 {
        let opacity = opacity_for_tag(tag);
        if let Err(e) = sink.write_opacity(opacity) {
            log::debug!("[fish] {}", e);
        }
        opacity
    }

    /// Bring the follower in line with the current device policy. Safe to
    /// call repeatedly with the same value.
    pub fn apply_capability<S: SpriteSink>(&mut self, enabled: bool, host: &mut H, sink: &mut S) {
        if enabled {
            self.set_visible(true, sink);
            self.start(host);
        } else {
            self.stop(host);
            self.set_visible(false, sink);
        }
    }

    fn set_visible<S: SpriteSink>(&mut self, visible: bool, sink: &mut S) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        log::debug!("[fish] visible={}", visible);
        if let Err(e) = sink.set_visible(visible) {
            log::debug!("[fish] {}", e);
        }
    }
}
