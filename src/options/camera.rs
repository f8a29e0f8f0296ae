use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::Projection;
use crate::camera::smoothing::SmoothingMode;
use crate::error::RigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Rig", inline)]
#[serde(default)]
/// Orbit, pan, and zoom control parameters.
pub struct RigOptions {
    /// Degrees of rotation per unit pointer delta per second.
    #[schemars(title = "Orbit Speed", range(min = 10.0, max = 1000.0), extend("step" = 10.0))]
    pub orbit_speed: f32,
    /// World units of pan per unit pointer delta.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub pan_speed: f32,
    /// Log-distance units per unit scroll delta.
    #[schemars(title = "Zoom Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Interpolation aggressiveness (higher = snappier).
    #[schemars(title = "Smoothness", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub smoothness: f32,
    /// Closest allowed camera distance from the look target.
    #[schemars(skip)]
    pub min_zoom_distance: f32,
    /// Farthest allowed camera distance from the look target.
    #[schemars(skip)]
    pub max_zoom_distance: f32,
    /// Largest allowed pan offset magnitude.
    #[schemars(title = "Max Pan Distance", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub max_pan_distance: f32,
    /// Smoothing law applied to zoom, pan, position, and rotation.
    #[schemars(skip)]
    pub smoothing: SmoothingMode,
    /// Snap the final orientation to face the pivot plus pan offset.
    #[schemars(skip)]
    pub look_at_pivot: bool,
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            orbit_speed: 300.0,
            pan_speed: 0.01,
            zoom_speed: 0.5,
            smoothness: 10.0,
            min_zoom_distance: 0.1,
            max_zoom_distance: 1000.0,
            max_pan_distance: 10.0,
            smoothing: SmoothingMode::Lerp,
            look_at_pivot: true,
        }
    }
}

impl RigOptions {
    /// Reject values that would make the zoom or pan clamps meaningless.
    pub fn validate(&self) -> Result<(), RigError> {
        let speeds = [
            ("orbit_speed", self.orbit_speed),
            ("pan_speed", self.pan_speed),
            ("zoom_speed", self.zoom_speed),
            ("smoothness", self.smoothness),
            ("max_pan_distance", self.max_pan_distance),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(RigError::Configuration(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if !(self.min_zoom_distance.is_finite() && self.min_zoom_distance > 0.0)
        {
            return Err(RigError::Configuration(format!(
                "min_zoom_distance must be positive, got {}",
                self.min_zoom_distance
            )));
        }
        if !self.max_zoom_distance.is_finite()
            || self.max_zoom_distance < self.min_zoom_distance
        {
            return Err(RigError::Configuration(format!(
                "max_zoom_distance ({}) must be finite and at least \
                 min_zoom_distance ({})",
                self.max_zoom_distance, self.min_zoom_distance
            )));
        }
        Ok(())
    }

    /// Log-distance clamp range `[ln(min), ln(max)]`.
    #[must_use]
    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom_distance.ln(), self.max_zoom_distance.ln())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Perspective projection parameters for the rendered camera.
pub struct ProjectionOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.01,
            zfar: 5000.0,
        }
    }
}

impl ProjectionOptions {
    /// Projection for a viewport of the given pixel size.
    #[must_use]
    pub fn projection(&self, width: f32, height: f32) -> Projection {
        Projection {
            fovy: self.fovy,
            aspect: if height > 0.0 { width / height } else { 1.0 },
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
