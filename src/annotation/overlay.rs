use glam::{Mat4, Vec2, Vec3};

use super::AnnotationSet;
use crate::camera::core::Camera;
use crate::options::AnnotationOptions;

/// Answers whether scene geometry blocks a segment.
///
/// The overlay asks once per annotation, with the segment running from the
/// annotation toward the camera eye.
pub trait OcclusionQuery {
    /// `true` if anything blocks the segment that starts at `from` and runs
    /// `distance` units along the unit vector `direction`.
    fn is_occluded(&self, from: Vec3, direction: Vec3, distance: f32) -> bool;
}

/// Occlusion query for hosts without scene geometry: nothing is hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOcclusion;

impl OcclusionQuery for NoOcclusion {
    fn is_occluded(&self, _: Vec3, _: Vec3, _: f32) -> bool {
        false
    }
}

impl<F> OcclusionQuery for F
where
    F: Fn(Vec3, Vec3, f32) -> bool,
{
    fn is_occluded(&self, from: Vec3, direction: Vec3, distance: f32) -> bool {
        self(from, direction, distance)
    }
}

/// Screen-space rectangle, origin top-left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `center`.
    #[must_use]
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        let corner = center - Vec2::new(width, height) / 2.0;
        Self::new(corner.x, corner.y, width, height)
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether `point` lies inside (left/top edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Description box of a selected annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionLayout {
    /// Box placement.
    pub rect: Rect,
    /// Title and description separated by a blank line.
    pub text: String,
}

/// Where one visible annotation is drawn this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayout {
    /// Index into the [`AnnotationSet`].
    pub index: usize,
    /// Marker label (1-based list position).
    pub label: String,
    /// Marker square.
    pub marker: Rect,
    /// Whether the cursor is over the marker.
    pub hovered: bool,
    /// Present when the annotation is selected.
    pub description: Option<DescriptionLayout>,
}

/// Project `point` into GUI coordinates for a `viewport`-sized window.
///
/// Returns `None` when the point is behind the camera. Points outside the
/// viewport still project, so partially visible markers can be drawn.
#[must_use]
pub fn project_to_screen(
    camera: &Camera,
    point: Vec3,
    viewport: Vec2,
) -> Option<Vec2> {
    project_with(&camera.build_matrix(), point, viewport)
}

fn project_with(view_proj: &Mat4, point: Vec3, viewport: Vec2) -> Option<Vec2> {
    let clip = *view_proj * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y, // Flip Y
    ))
}

/// Lay out every visible, unoccluded annotation in front of the camera.
///
/// `cursor` (GUI coordinates) only drives the `hovered` flag.
#[must_use]
pub fn layout_overlay(
    set: &AnnotationSet,
    camera: &Camera,
    viewport: Vec2,
    style: &AnnotationOptions,
    occlusion: &impl OcclusionQuery,
    cursor: Option<Vec2>,
) -> Vec<MarkerLayout> {
    if !set.visible || !style.visible {
        return Vec::new();
    }
    let view_proj = camera.build_matrix();
    let size = style.point_size;

    set.iter()
        .enumerate()
        .filter(|(_, annotation)| {
            let from = annotation.position;
            let to_eye = camera.eye - from;
            let distance = to_eye.length();
            distance <= f32::EPSILON
                || !occlusion.is_occluded(from, to_eye / distance, distance)
        })
        .filter_map(|(index, annotation)| {
            let screen =
                project_with(&view_proj, annotation.position, viewport)?;
            let marker = Rect::centered(screen, size, size);
            let description = annotation.selected.then(|| DescriptionLayout {
                rect: Rect::new(
                    screen.x - style.description_width / 2.0,
                    screen.y - size - style.description_height,
                    style.description_width,
                    style.description_height,
                ),
                text: annotation.description_text(),
            });
            Some(MarkerLayout {
                index,
                label: (index + 1).to_string(),
                marker,
                hovered: cursor.is_some_and(|c| marker.contains(c)),
                description,
            })
        })
        .collect()
}

/// Toggle selection of the first marker under `point`.
///
/// Returns the index of the toggled annotation, if any marker was hit.
pub fn click_overlay(
    set: &mut AnnotationSet,
    layouts: &[MarkerLayout],
    point: Vec2,
) -> Option<usize> {
    let hit = layouts.iter().find(|layout| layout.marker.contains(point))?;
    let selected = set.toggle_selected(hit.index)?;
    log::debug!(
        "annotation {} {}",
        hit.index + 1,
        if selected { "selected" } else { "deselected" }
    );
    Some(hit.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::{CameraPose, Projection};
    use glam::Quat;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    /// Camera at +Z looking at the origin.
    fn camera() -> Camera {
        Camera::from_pose(
            &CameraPose {
                position: Vec3::new(0.0, 0.0, 10.0),
                orientation: Quat::IDENTITY,
            },
            &Projection {
                fovy: 60.0,
                aspect: VIEWPORT.x / VIEWPORT.y,
                znear: 0.1,
                zfar: 100.0,
            },
        )
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(29.9, 29.9)));
        assert!(!r.contains(Vec2::new(30.0, 15.0)));
        assert_eq!(Rect::centered(Vec2::new(20.0, 20.0), 20.0, 20.0), r);
        assert_eq!(r.center(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn projection_maps_to_gui_coordinates() {
        let cam = camera();
        let center = project_to_screen(&cam, Vec3::ZERO, VIEWPORT).unwrap();
        assert!(center.abs_diff_eq(Vec2::new(400.0, 300.0), 1e-3));

        // Up in world is up on screen, which is a smaller GUI y.
        let above = project_to_screen(&cam, Vec3::Y, VIEWPORT).unwrap();
        assert!(above.y < 300.0);
        let right = project_to_screen(&cam, Vec3::X, VIEWPORT).unwrap();
        assert!(right.x > 400.0);
    }

    #[test]
    fn points_behind_camera_do_not_project() {
        let cam = camera();
        let behind = Vec3::new(0.0, 0.0, 20.0);
        assert!(project_to_screen(&cam, behind, VIEWPORT).is_none());
    }

    #[test]
    fn layout_skips_hidden_occluded_and_behind() {
        let mut set = AnnotationSet::new();
        let _ = set.add(Vec3::ZERO);
        let _ = set.add(Vec3::new(0.0, 0.0, 20.0)); // behind the camera
        let _ = set.add(Vec3::new(2.0, 0.0, 0.0)); // occluded below
        let style = AnnotationOptions::default();

        let blocks_positive_x =
            |from: Vec3, _dir: Vec3, _dist: f32| from.x > 1.0;
        let layouts = layout_overlay(
            &set,
            &camera(),
            VIEWPORT,
            &style,
            &blocks_positive_x,
            None,
        );
        assert_eq!(layouts.len(), 1);
        assert_eq!(layouts[0].index, 0);
        assert_eq!(layouts[0].label, "1");
        assert!(layouts[0]
            .marker
            .center()
            .abs_diff_eq(Vec2::new(400.0, 300.0), 1e-3));
        assert_eq!(layouts[0].marker.width, style.point_size);

        set.visible = false;
        let hidden = layout_overlay(
            &set,
            &camera(),
            VIEWPORT,
            &style,
            &NoOcclusion,
            None,
        );
        assert!(hidden.is_empty());
    }

    #[test]
    fn occlusion_ray_points_at_the_eye() {
        let mut set = AnnotationSet::new();
        let _ = set.add(Vec3::new(0.0, 0.0, 4.0));
        let check = |from: Vec3, dir: Vec3, dist: f32| {
            assert!(from.abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-6));
            assert!(dir.abs_diff_eq(Vec3::Z, 1e-6));
            assert!((dist - 6.0).abs() < 1e-5);
            false
        };
        let layouts = layout_overlay(
            &set,
            &camera(),
            VIEWPORT,
            &AnnotationOptions::default(),
            &check,
            None,
        );
        assert_eq!(layouts.len(), 1);
    }

    #[test]
    fn selected_annotation_gets_description_above_marker() {
        let mut set = AnnotationSet::new();
        let _ = set.add_with_text(Vec3::ZERO, "Valve", "Opens clockwise");
        let _ = set.toggle_selected(0);
        let style = AnnotationOptions::default();
        let layouts = layout_overlay(
            &set,
            &camera(),
            VIEWPORT,
            &style,
            &NoOcclusion,
            None,
        );
        let description = layouts[0].description.as_ref().unwrap();
        assert_eq!(description.text, "Valve\n\nOpens clockwise");
        assert!((description.rect.x - (400.0 - 150.0)).abs() < 1e-3);
        assert!((description.rect.y - (300.0 - 40.0 - 150.0)).abs() < 1e-3);
        assert_eq!(description.rect.width, 300.0);
    }

    #[test]
    fn click_toggles_first_hit_marker() {
        let mut set = AnnotationSet::new();
        let _ = set.add(Vec3::ZERO);
        let _ = set.add(Vec3::new(0.01, 0.0, 0.0)); // overlaps the first
        let style = AnnotationOptions::default();
        let cursor = Vec2::new(400.0, 300.0);
        let layouts = layout_overlay(
            &set,
            &camera(),
            VIEWPORT,
            &style,
            &NoOcclusion,
            Some(cursor),
        );
        assert!(layouts.iter().all(|l| l.hovered));

        assert_eq!(click_overlay(&mut set, &layouts, cursor), Some(0));
        assert!(set.get(0).is_some_and(|a| a.selected));
        assert!(set.get(1).is_some_and(|a| !a.selected));

        let miss = Vec2::new(5.0, 5.0);
        assert_eq!(click_overlay(&mut set, &layouts, miss), None);
    }
}
