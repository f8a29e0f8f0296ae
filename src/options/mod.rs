//! Rig, projection, and annotation options with TOML preset support.
//!
//! Every tunable is consolidated here. Options serialize to/from TOML so a
//! host can keep presets next to its scenes.

mod annotations;
mod camera;

use std::path::Path;

pub use annotations::AnnotationOptions;
pub use camera::{ProjectionOptions, RigOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rig]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit, pan, and zoom parameters.
    pub rig: RigOptions,
    /// Perspective projection parameters.
    pub projection: ProjectionOptions,
    /// Annotation overlay styling.
    pub annotations: AnnotationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, RigError> {
        toml::from_str(content)
            .map_err(|e| RigError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RigError> {
        let content = std::fs::read_to_string(path).map_err(RigError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RigError::Io)?;
        }
        std::fs::write(path, content).map_err(RigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::smoothing::SmoothingMode;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[rig]
smoothness = 4.0
smoothing = "exponential"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.rig.smoothness, 4.0);
        assert_eq!(opts.rig.smoothing, SmoothingMode::Exponential);
        // Everything else should be default
        assert_eq!(opts.rig.orbit_speed, 300.0);
        assert_eq!(opts.annotations.point_size, 40.0);
        assert_eq!(opts.projection, ProjectionOptions::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[rig\nsmoothness = ").unwrap_err();
        assert!(matches!(err, RigError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("orbit-rig-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.rig.max_pan_distance = 3.5;
        opts.save(&dir.join("close_up.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("close_up.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["close_up".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/nonexistent/orbit-rig.toml");
        let err = Options::load(path).unwrap_err();
        assert!(matches!(err, RigError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("rig"));
        assert!(props.contains_key("projection"));
        assert!(props.contains_key("annotations"));

        let rig_props = props["rig"]["properties"].as_object().unwrap();
        assert!(rig_props.contains_key("orbit_speed"));
        assert!(!rig_props.contains_key("min_zoom_distance"));
    }
}
