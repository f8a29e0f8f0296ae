use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Annotation marker and description-box styling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Annotations", inline)]
#[serde(default)]
pub struct AnnotationOptions {
    /// Whether annotations are drawn at all.
    #[schemars(title = "Show Annotations")]
    pub visible: bool,
    /// Marker diameter in screen pixels.
    #[schemars(title = "Marker Size", range(min = 20.0, max = 100.0), extend("step" = 1.0))]
    pub point_size: f32,
    /// Font size of the marker number.
    #[schemars(title = "Marker Font Size", range(min = 10, max = 36))]
    pub font_size: u32,
    /// RGBA fill of the marker disc.
    #[schemars(skip)]
    pub marker_color: [f32; 4],
    /// RGBA of the marker number text.
    #[schemars(skip)]
    pub text_color: [f32; 4],
    /// RGBA overlay drawn on a hovered marker.
    #[schemars(skip)]
    pub highlight_color: [f32; 4],
    /// Description box width in screen pixels.
    #[schemars(title = "Description Width", range(min = 200.0, max = 500.0), extend("step" = 10.0))]
    pub description_width: f32,
    /// Description box height in screen pixels.
    #[schemars(title = "Description Height", range(min = 100.0, max = 300.0), extend("step" = 10.0))]
    pub description_height: f32,
    /// Font size of the description text.
    #[schemars(title = "Description Font Size", range(min = 12, max = 24))]
    pub description_font_size: u32,
    /// RGBA background of the description box.
    #[schemars(skip)]
    pub description_background: [f32; 4],
    /// RGBA of the description text.
    #[schemars(skip)]
    pub description_text_color: [f32; 4],
}

impl Default for AnnotationOptions {
    fn default() -> Self {
        Self {
            visible: true,
            point_size: 40.0,
            font_size: 18,
            marker_color: [0.0, 0.0, 1.0, 1.0],
            text_color: [1.0, 1.0, 1.0, 1.0],
            highlight_color: [1.0, 1.0, 0.0, 0.5],
            description_width: 300.0,
            description_height: 150.0,
            description_font_size: 16,
            description_background: [0.0, 0.0, 0.0, 0.8],
            description_text_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}
