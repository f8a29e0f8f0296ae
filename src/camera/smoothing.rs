//! Interpolation factor used by the rig's per-tick smoothing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the per-tick interpolation factor is derived from `smoothness` and
/// the frame time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// `clamp(dt * smoothness, 0, 1)`.
    ///
    /// Trajectories differ between frame rates: at 30 fps a step
    /// settles in fewer, larger moves than at 144 fps.
    #[default]
    Lerp,
    /// `1 - exp(-smoothness * dt)`. Frame-rate independent decay.
    Exponential,
}

impl SmoothingMode {
    /// Interpolation factor in `[0, 1]` for one tick of length `dt`.
    #[must_use]
    pub fn factor(self, smoothness: f32, dt: f32) -> f32 {
        if dt <= 0.0 || smoothness <= 0.0 || !dt.is_finite() {
            return 0.0;
        }
        let t = match self {
            Self::Lerp => dt * smoothness,
            Self::Exponential => 1.0 - (-smoothness * dt).exp(),
        };
        t.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_is_linear_in_dt() {
        let t = SmoothingMode::Lerp.factor(10.0, 0.016);
        assert!((t - 0.16).abs() < 1e-6);
    }

    #[test]
    fn lerp_saturates_on_long_frames() {
        assert_eq!(SmoothingMode::Lerp.factor(10.0, 0.5), 1.0);
    }

    #[test]
    fn exponential_matches_closed_form() {
        let t = SmoothingMode::Exponential.factor(10.0, 0.016);
        assert!((t - (1.0 - (-0.16f32).exp())).abs() < 1e-6);
        assert!(t < 0.16);
    }

    #[test]
    fn exponential_is_frame_rate_independent() {
        // Two half-ticks leave the same remainder as one full tick.
        let full = 1.0 - SmoothingMode::Exponential.factor(8.0, 0.02);
        let half = 1.0 - SmoothingMode::Exponential.factor(8.0, 0.01);
        assert!((full - half * half).abs() < 1e-5);
    }

    #[test]
    fn non_positive_inputs_freeze() {
        assert_eq!(SmoothingMode::Lerp.factor(10.0, 0.0), 0.0);
        assert_eq!(SmoothingMode::Exponential.factor(10.0, -1.0), 0.0);
        assert_eq!(SmoothingMode::Lerp.factor(0.0, 0.016), 0.0);
        assert_eq!(SmoothingMode::Lerp.factor(10.0, f32::NAN), 0.0);
    }
}
