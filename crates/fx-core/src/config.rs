//! Tunable parameters for both effects.
//!
//! Defaults come from `constants.rs`; the web front-end builds one
//! [`EffectsConfig`] at startup and hands the relevant part to each effect.

use crate::constants::*;
use std::time::Duration;

/// Damped follower tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerParams {
    /// Smoothing coefficient in (0, 1).
    pub ease: f32,
    pub speed_gain: f32,
    pub speed_cap: f32,
    pub scale_gain: f32,
}

impl Default for FollowerParams {
    fn default() -> Self {
        Self {
            ease: FOLLOW_EASE,
            speed_gain: FOLLOW_SPEED_GAIN,
            speed_cap: FOLLOW_SPEED_CAP,
            scale_gain: FOLLOW_SCALE_GAIN,
        }
    }
}

impl FollowerParams {
    /// Upper bound on the sprite scale for any velocity.
    #[inline]
    pub fn max_scale(&self) -> f32 {
        1.0 + self.speed_cap * self.scale_gain
    }
}

/// Distortion controller tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistortionParams {
    pub min_intensity: f32,
    pub max_intensity: f32,
    pub start_intensity: f32,
    /// Per-frame fraction of the gap between current and target intensity.
    pub decay_rate: f32,
    pub reach_factor: f32,
    pub secondary_ratio: f32,
    pub displacement_base: f32,
    pub displacement_gain: f32,
    pub stop_delay: Duration,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            min_intensity: MIN_INTENSITY,
            max_intensity: MAX_INTENSITY,
            start_intensity: START_INTENSITY,
            decay_rate: INTENSITY_DECAY_RATE,
            reach_factor: REACH_FACTOR,
            secondary_ratio: SECONDARY_FREQUENCY_RATIO,
            displacement_base: DISPLACEMENT_BASE,
            displacement_gain: DISPLACEMENT_GAIN,
            stop_delay: Duration::from_millis(STOP_DELAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectsConfig {
    pub follower: FollowerParams,
    pub distortion: DistortionParams,
    pub breakpoint_px: f32,
    pub edge_margin: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            follower: FollowerParams::default(),
            distortion: DistortionParams::default(),
            breakpoint_px: FOLLOWER_BREAKPOINT_PX,
            edge_margin: VIEWPORT_EDGE_MARGIN_PX,
        }
    }
}
