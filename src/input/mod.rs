//! Input handling: platform-agnostic events and the per-tick samples the
//! rig consumes.

/// Platform-agnostic input events.
pub mod event;
/// Event accumulation into per-tick samples.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use state::{InputSample, InputSampler, InputState};
