use glam::{EulerRot, Quat, Vec3};

use crate::bounds::BoundsProvider;
use crate::camera::core::{
    look_rotation, Camera, CameraPose, Projection, FORWARD,
};
use crate::error::RigError;
use crate::input::{InputSample, InputSampler};
use crate::options::RigOptions;

/// Pitch is clamped to `[-PITCH_LIMIT, PITCH_LIMIT]` degrees.
pub const PITCH_LIMIT: f32 = 80.0;

/// Orientation for `(pitch, yaw)` in degrees with zero roll.
///
/// Positive yaw turns right, positive pitch looks down. Yaw is applied
/// about world Y, pitch about the yawed X axis.
#[must_use]
pub fn orientation_from_angles(pitch: f32, yaw: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        -yaw.to_radians(),
        -pitch.to_radians(),
        0.0,
    )
}

/// Inverse of [`orientation_from_angles`], roll discarded.
fn angles_from_orientation(orientation: Quat) -> (f32, f32) {
    let (y, x, _) = orientation.to_euler(EulerRot::YXZ);
    (-x.to_degrees(), -y.to_degrees())
}

/// Result of one [`OrbitRig::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Input and smoothing were applied.
    Moved(CameraPose),
    /// The subject was unavailable; the previous pose is held unchanged.
    TargetLost(CameraPose),
}

impl TickOutcome {
    /// Pose after the tick, whichever way it went.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        match self {
            Self::Moved(pose) | Self::TargetLost(pose) => *pose,
        }
    }
}

/// Orbit camera around a fixed pivot with smoothed orbit, pan, and zoom.
///
/// Zoom lives in log-distance space so each scroll step changes the
/// distance by a constant ratio. Pan moves the look target away from the
/// pivot inside a sphere of radius `max_pan_distance`; the pivot itself
/// never moves after construction.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    options: RigOptions,
    pivot: Vec3,
    /// Degrees, unbounded.
    yaw: f32,
    /// Degrees, within `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pitch: f32,
    current_zoom: f32,
    target_zoom: f32,
    pan_offset: Vec3,
    target_pan_offset: Vec3,
    target_orientation: Quat,
    pose: CameraPose,
    target_lost: bool,
}

impl OrbitRig {
    /// Frame the subject starting from the identity orientation (looking
    /// down -Z).
    pub fn new(
        subject: &impl BoundsProvider,
        options: RigOptions,
    ) -> Result<Self, RigError> {
        Self::with_orientation(subject, options, Quat::IDENTITY)
    }

    /// Frame the subject looking along `orientation`'s forward axis.
    ///
    /// The camera starts `2 * |extents|` away from the bounds center.
    /// Fails when the subject has no bounds or its bounds have no size,
    /// since that would put the camera on top of the pivot.
    pub fn with_orientation(
        subject: &impl BoundsProvider,
        options: RigOptions,
        orientation: Quat,
    ) -> Result<Self, RigError> {
        options.validate()?;
        let bounds = subject.bounds().ok_or_else(|| {
            RigError::Configuration("subject has no bounding volume".into())
        })?;
        if bounds.is_degenerate() {
            return Err(RigError::Configuration(format!(
                "subject bounds are degenerate (center {}, extents {})",
                bounds.center, bounds.extents
            )));
        }

        let orientation = if orientation.is_finite() {
            orientation.normalize()
        } else {
            Quat::IDENTITY
        };
        let pivot = bounds.center;
        let initial_distance = bounds.extents.length() * 2.0;
        let position = pivot - orientation * FORWARD * initial_distance;
        let zoom = initial_distance.ln();
        let (pitch, yaw) = angles_from_orientation(orientation);

        log::debug!(
            "orbit rig framed pivot {pivot} at distance {initial_distance:.3}"
        );

        Ok(Self {
            options,
            pivot,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            current_zoom: zoom,
            target_zoom: zoom,
            pan_offset: Vec3::ZERO,
            target_pan_offset: Vec3::ZERO,
            target_orientation: orientation,
            pose: CameraPose {
                position,
                orientation,
            },
            target_lost: false,
        })
    }

    /// Sample `input` once and advance by `dt` seconds.
    pub fn update(
        &mut self,
        input: &mut impl InputSampler,
        subject: &impl BoundsProvider,
        dt: f32,
    ) -> TickOutcome {
        let sample = input.sample();
        self.tick(&sample, subject, dt)
    }

    /// Advance the rig by one frame of `dt` seconds.
    ///
    /// When `subject` reports no bounds the rig holds its pose and all
    /// state; it resumes normally once bounds are available again.
    pub fn tick(
        &mut self,
        input: &InputSample,
        subject: &impl BoundsProvider,
        dt: f32,
    ) -> TickOutcome {
        if subject.bounds().is_none() {
            if !self.target_lost {
                log::warn!("orbit subject unavailable, holding camera pose");
                self.target_lost = true;
            }
            return TickOutcome::TargetLost(self.pose);
        }
        if self.target_lost {
            log::info!("orbit subject available again, resuming");
            self.target_lost = false;
        }

        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.apply_orbit(input, dt);
        self.apply_pan(input);
        self.apply_zoom(input);
        self.settle(dt);
        TickOutcome::Moved(self.pose)
    }

    fn apply_orbit(&mut self, input: &InputSample, dt: f32) {
        if !input.orbit_held || !input.pointer_delta.is_finite() {
            return;
        }
        let step = self.options.orbit_speed * dt;
        self.yaw += input.pointer_delta.x * step;
        self.pitch = (self.pitch - input.pointer_delta.y * step)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.target_orientation = orientation_from_angles(self.pitch, self.yaw);
    }

    fn apply_pan(&mut self, input: &InputSample) {
        if !input.pan_held || !input.pointer_delta.is_finite() {
            return;
        }
        // Camera-local axes, not world axes.
        let delta = input.pointer_delta;
        let direction = (self.pose.right() * -delta.x
            + self.pose.up() * -delta.y)
            * self.options.pan_speed;
        self.target_pan_offset = (self.target_pan_offset + direction)
            .clamp_length_max(self.options.max_pan_distance);
    }

    fn apply_zoom(&mut self, input: &InputSample) {
        if input.scroll == 0.0 || !input.scroll.is_finite() {
            return;
        }
        let (min, max) = self.options.zoom_range();
        let step = input.scroll * self.options.zoom_speed;
        self.target_zoom = (self.target_zoom - step).clamp(min, max);
    }

    fn settle(&mut self, dt: f32) {
        let t = self.options.smoothing.factor(self.options.smoothness, dt);

        self.current_zoom += (self.target_zoom - self.current_zoom) * t;
        self.pan_offset = self.pan_offset.lerp(self.target_pan_offset, t);

        // Position follows the target orientation; the rotation itself is
        // smoothed separately below.
        let desired = self.look_target()
            - self.target_orientation * FORWARD * self.distance();
        self.pose.position = self.pose.position.lerp(desired, t);

        let smoothed = self.pose.orientation.slerp(self.target_orientation, t);
        self.pose.orientation = if self.options.look_at_pivot {
            look_rotation(self.look_target() - self.pose.position, Vec3::Y)
                .unwrap_or(smoothed)
        } else {
            smoothed
        };
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Perspective camera at the current pose.
    #[must_use]
    pub fn camera(&self, projection: &Projection) -> Camera {
        Camera::from_pose(&self.pose, projection)
    }

    /// Fixed orbit center.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Pivot shifted by the smoothed pan offset.
    #[must_use]
    pub fn look_target(&self) -> Vec3 {
        self.pivot + self.pan_offset
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Smoothed log-distance.
    #[must_use]
    pub fn current_zoom(&self) -> f32 {
        self.current_zoom
    }

    /// Log-distance the zoom is heading toward.
    #[must_use]
    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    /// Smoothed camera distance from the look target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.current_zoom.exp()
    }

    /// Smoothed pan offset.
    #[must_use]
    pub fn pan_offset(&self) -> Vec3 {
        self.pan_offset
    }

    /// Pan offset the smoothing is heading toward.
    #[must_use]
    pub fn target_pan_offset(&self) -> Vec3 {
        self.target_pan_offset
    }

    /// Orientation derived from the accumulated yaw and pitch.
    #[must_use]
    pub fn target_orientation(&self) -> Quat {
        self.target_orientation
    }

    /// Whether the last tick found the subject missing.
    #[must_use]
    pub fn is_target_lost(&self) -> bool {
        self.target_lost
    }

    /// Options the rig was built with.
    #[must_use]
    pub fn options(&self) -> &RigOptions {
        &self.options
    }
}
