//! Numbered world-space annotations and their screen-space overlay layout.
//!
//! The crate only computes *where* markers and description boxes go. Drawing
//! them, and answering occlusion queries against scene geometry, belongs to
//! the host.

mod overlay;
mod sprite;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use overlay::{
    click_overlay, layout_overlay, project_to_screen, DescriptionLayout,
    MarkerLayout, NoOcclusion, OcclusionQuery, Rect,
};
pub use sprite::circle_sprite;

/// Title given to annotations created without text.
pub const DEFAULT_TITLE: &str = "New Annotation";
/// Description given to annotations created without text.
pub const DEFAULT_DESCRIPTION: &str = "Enter description here";

/// A labelled point on the subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Anchor point in world space.
    pub position: Vec3,
    /// Short heading shown above the description.
    pub title: String,
    /// Body text shown when the annotation is selected.
    pub description: String,
    /// 1-based display number.
    pub number: usize,
    /// Whether the description box is open.
    pub selected: bool,
}

impl Annotation {
    /// Annotation with default title and description.
    #[must_use]
    pub fn new(position: Vec3, number: usize) -> Self {
        Self {
            position,
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            number,
            selected: false,
        }
    }

    /// Text shown inside the description box.
    #[must_use]
    pub fn description_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.description)
    }
}

/// Ordered annotation list with a global visibility switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    /// When `false` no markers are laid out.
    pub visible: bool,
    annotations: Vec<Annotation>,
}

impl Default for AnnotationSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationSet {
    /// Empty, visible set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: true,
            annotations: Vec::new(),
        }
    }

    /// Append an annotation with default text; returns its index.
    pub fn add(&mut self, position: Vec3) -> usize {
        let index = self.annotations.len();
        self.annotations.push(Annotation::new(position, index + 1));
        index
    }

    /// Append an annotation with the given text; returns its index.
    pub fn add_with_text(
        &mut self,
        position: Vec3,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> usize {
        let index = self.add(position);
        let annotation = &mut self.annotations[index];
        annotation.title = title.into();
        annotation.description = description.into();
        index
    }

    /// Remove and return the annotation at `index`. Numbers are left as-is
    /// until [`renumber`](Self::renumber) is called.
    pub fn remove(&mut self, index: usize) -> Option<Annotation> {
        (index < self.annotations.len()).then(|| self.annotations.remove(index))
    }

    /// Reset every number to its 1-based position in the list.
    pub fn renumber(&mut self) {
        for (i, annotation) in self.annotations.iter_mut().enumerate() {
            annotation.number = i + 1;
        }
    }

    /// Flip overall visibility; returns the new state.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Flip selection of one annotation; returns the new state, or `None`
    /// for an out-of-range index.
    pub fn toggle_selected(&mut self, index: usize) -> Option<bool> {
        let annotation = self.annotations.get_mut(index)?;
        annotation.selected = !annotation.selected;
        Some(annotation.selected)
    }

    /// Annotation at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Annotation> {
        self.annotations.get(index)
    }

    /// Mutable annotation at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Annotation> {
        self.annotations.get_mut(index)
    }

    /// Number of annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Whether the set has no annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Annotations in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}
