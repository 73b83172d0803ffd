//! Device-class policy, evaluated once and shared by both effects.

/// What the page reported about the device at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceProfile {
    pub touch: bool,
    pub viewport_width: f32,
}

/// Which effects may run on this device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub distortion: bool,
    pub follower: bool,
}

impl Capabilities {
    pub fn evaluate(profile: DeviceProfile, breakpoint_px: f32) -> Self {
        Self {
            distortion: !profile.touch,
            follower: follower_allowed(profile, breakpoint_px),
        }
    }

    /// Touch devices get neither effect.
    #[inline]
    pub fn any(&self) -> bool {
        self.distortion || self.follower
    }
}

#[inline]
pub fn follower_allowed(profile: DeviceProfile, breakpoint_px: f32) -> bool {
    !profile.touch && profile.viewport_width >= breakpoint_px
}

/// True when a resize moved the viewport from one side of the breakpoint to the other.
#[inline]
pub fn crosses_breakpoint(old_width: f32, new_width: f32, breakpoint_px: f32) -> bool {
    (old_width >= breakpoint_px) != (new_width >= breakpoint_px)
}
