// DOM hooks and event names the effects attach to.

// Liquify: the hover region and the SVG filter primitives it drives
pub const IMG_STACK_ID: &str = "imgStack";
pub const TURBULENCE_ID: &str = "turb"; // feTurbulence
pub const PROFILE_BACK_ID: &str = "profileBack"; // filtered image layer
pub const DISPLACEMENT_SELECTOR: &str = "feDisplacementMap"; // sibling of #turb

// Fish sprite
pub const FISH_ID: &str = "fish";

// Window-level input
pub const MOVE_EVENTS: [&str; 2] = ["pointermove", "touchmove"];
pub const OPACITY_EVENTS: [&str; 4] = ["pointerdown", "pointerup", "pointerover", "pointerout"];

// Device class probes
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// Media query that matches viewports narrower than `breakpoint_px`.
pub fn narrow_viewport_query(breakpoint_px: f32) -> String {
    format!("(max-width: {}px)", breakpoint_px.round() as i32 - 1)
}
