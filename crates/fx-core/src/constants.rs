// Smoothing and mapping constants shared by both effects.

// Follower (fish) smoothing
pub const FOLLOW_EASE: f32 = 0.14; // fraction of the remaining gap closed per frame
pub const FOLLOW_SPEED_GAIN: f32 = 0.08; // px/frame -> speed units
pub const FOLLOW_SPEED_CAP: f32 = 1.6; // saturation point for the speed term
pub const FOLLOW_SCALE_GAIN: f32 = 0.14; // how much a saturated speed enlarges the sprite

// Follower opacity side channel
pub const DIMMED_OPACITY: f32 = 0.22;
pub const FULL_OPACITY: f32 = 1.0;
pub const INTERACTIVE_TAGS: [&str; 6] = ["A", "BUTTON", "INPUT", "TEXTAREA", "SELECT", "LABEL"];

// Distortion intensity range (feTurbulence baseFrequency)
pub const MIN_INTENSITY: f32 = 0.002;
pub const MAX_INTENSITY: f32 = 0.03;
pub const START_INTENSITY: f32 = 0.01; // seeded on hover enter

// Distortion smoothing and mapping
pub const INTENSITY_DECAY_RATE: f32 = 0.18;
pub const REACH_FACTOR: f32 = 0.6; // max distance = max(w, h) * factor
pub const SECONDARY_FREQUENCY_RATIO: f32 = 0.9; // y frequency = x * ratio
pub const DISPLACEMENT_BASE: f32 = 8.0;
pub const DISPLACEMENT_GAIN: f32 = 220.0;

// Grace period between hover exit and loop teardown
pub const STOP_DELAY_MS: u64 = 300;

// Viewport policy
pub const FOLLOWER_BREAKPOINT_PX: f32 = 900.0; // follower disabled below this width
pub const VIEWPORT_EDGE_MARGIN_PX: f32 = 6.0; // keep the pointer target this far inside on resize
