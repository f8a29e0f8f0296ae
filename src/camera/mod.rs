//! Camera system for inspecting a single subject.
//!
//! Provides an orbit rig with smoothed rotation, panning, and log-space
//! zoom, plus the perspective camera a host renders with.

/// Orbit rig driven by per-tick input samples.
pub mod controller;
/// Camera pose and perspective camera types.
pub mod core;
/// Per-tick interpolation factor.
pub mod smoothing;

pub use controller::{OrbitRig, TickOutcome};
pub use self::core::{Camera, CameraPose, Projection};
pub use smoothing::SmoothingMode;
