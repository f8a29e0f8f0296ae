//! Axis-aligned bounding volumes and the subject-bounds capability.
//!
//! The rig never walks a scene itself. Hosts hand it something that
//! implements [`BoundsProvider`]; the provider answers `None` while the
//! subject is missing.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Extents shorter than this are treated as "no measurable size".
pub const DEGENERATE_EXTENT: f32 = 1e-6;

/// Axis-aligned box stored as center plus half-size extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center of the box.
    pub center: Vec3,
    /// Half-size along each axis (always non-negative).
    pub extents: Vec3,
}

impl Aabb {
    /// Create a box from its center and half-size extents.
    #[must_use]
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self {
            center,
            extents: extents.abs(),
        }
    }

    /// Create a box spanning two corners (in any order).
    #[must_use]
    pub fn from_min_max(a: Vec3, b: Vec3) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    /// Tightest box around a point cloud, or `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, Vec3::ZERO);
        for p in rest {
            bounds.encapsulate_point(*p);
        }
        Some(bounds)
    }

    /// Minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    /// Maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    /// Full size along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }

    /// Grow the box so it also contains `point`.
    pub fn encapsulate_point(&mut self, point: Vec3) {
        let (min, max) = (self.min().min(point), self.max().max(point));
        *self = Self::from_min_max(min, max);
    }

    /// Grow the box so it also contains `other`.
    pub fn encapsulate(&mut self, other: &Self) {
        *self = Self::from_min_max(
            self.min().min(other.min()),
            self.max().max(other.max()),
        );
    }

    /// `true` when the box has no usable size (or contains NaN/inf).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.center.is_finite()
            || !self.extents.is_finite()
            || self.extents.length() < DEGENERATE_EXTENT
    }
}

/// Fold a subject's part bounds into a single volume.
///
/// The fold starts from a zero-size box at `origin`, so the subject's own
/// origin is always inside the result even when its parts are offset.
#[must_use]
pub fn subject_bounds(
    origin: Vec3,
    parts: impl IntoIterator<Item = Aabb>,
) -> Aabb {
    parts
        .into_iter()
        .fold(Aabb::new(origin, Vec3::ZERO), |mut acc, part| {
            acc.encapsulate(&part);
            acc
        })
}

/// Supplies the bounding volume of the orbited subject.
///
/// Returning `None` means the subject is currently unavailable.
pub trait BoundsProvider {
    /// Current bounds of the subject, if it exists.
    fn bounds(&self) -> Option<Aabb>;
}

impl BoundsProvider for Aabb {
    fn bounds(&self) -> Option<Aabb> {
        Some(*self)
    }
}

impl BoundsProvider for Option<Aabb> {
    fn bounds(&self) -> Option<Aabb> {
        *self
    }
}

impl<T: BoundsProvider + ?Sized> BoundsProvider for &T {
    fn bounds(&self) -> Option<Aabb> {
        (**self).bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_round_trip() {
        let b = Aabb::from_min_max(
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-1.0, 2.0, 5.0),
        );
        assert_eq!(b.center, Vec3::new(0.0, 0.0, 4.0));
        assert_eq!(b.extents, Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(b.min(), Vec3::new(-1.0, -2.0, 3.0));
        assert_eq!(b.size(), Vec3::new(2.0, 4.0, 2.0));
    }

    #[test]
    fn encapsulate_grows_to_cover_both() {
        let mut a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        a.encapsulate(&Aabb::new(Vec3::new(4.0, 0.0, 0.0), Vec3::ONE));
        assert_eq!(a.min(), Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(a.max(), Vec3::new(5.0, 1.0, 1.0));
    }

    #[test]
    fn subject_bounds_always_includes_origin() {
        let part = Aabb::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ONE);
        let b = subject_bounds(Vec3::ZERO, [part]);
        assert_eq!(b.min().x, 0.0);
        assert_eq!(b.max().x, 11.0);
    }

    #[test]
    fn subject_without_parts_is_degenerate() {
        let b = subject_bounds(Vec3::new(3.0, 4.0, 5.0), []);
        assert!(b.is_degenerate());
        assert_eq!(b.center, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn from_points_handles_empty_and_single() {
        assert!(Aabb::from_points(&[]).is_none());
        let single = Aabb::from_points(&[Vec3::ONE]);
        assert!(single.is_some_and(|b| b.is_degenerate()));
        let cloud = Aabb::from_points(&[Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0)]);
        assert_eq!(cloud.map(|b| b.center), Some(Vec3::ONE));
    }

    #[test]
    fn non_finite_bounds_are_degenerate() {
        let b = Aabb::new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE);
        assert!(b.is_degenerate());
    }

    #[test]
    fn providers_forward_bounds() {
        let b = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(b.bounds(), Some(b));
        assert_eq!((&b).bounds(), Some(b));
        let missing: Option<Aabb> = None;
        assert_eq!(missing.bounds(), None);
    }

    #[test]
    fn aabb_survives_toml_round_trip() {
        let b = Aabb::new(Vec3::new(0.0, 0.5, -1.25), Vec3::new(1.0, 0.5, 2.0));
        let toml_str = toml::to_string(&b).unwrap();
        assert!(toml_str.contains("extents"));
        let restored: Aabb = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored, b);
    }
}
