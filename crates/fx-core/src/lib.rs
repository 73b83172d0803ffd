pub mod capability;
pub mod config;
pub mod constants;
pub mod distortion;
pub mod error;
pub mod follower;
pub mod pointer;
pub mod scheduler;

pub use capability::*;
pub use config::*;
pub use distortion::{DistortionController, DistortionState, ElementRect, FilterOutput, FilterSink};
pub use error::{FxError, FxResult};
pub use follower::{Follower, FollowerState, SpriteSink, SpriteTransform};
pub use pointer::*;
pub use scheduler::{FrameHost, LoopState, RenderLoop};
