pub mod hover;
pub mod pointer;
pub mod viewport;

pub use hover::wire_hover;
pub use pointer::{wire_opacity, wire_pointer_source};
pub use viewport::{wire_breakpoint, wire_resize_clamp};
