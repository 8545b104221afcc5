//! JSON scene file loading.
//!
//! A scene file holds an optional `settings` block and a `catalog` of named
//! primitives and lights:
//!
//! ```json
//! {
//!   "settings": { "width": 400, "height": 400, "depth": 2 },
//!   "catalog": {
//!     "primitives": [
//!       { "name": "ball", "type": "sphere", "center": [0, 0, 5], "radius": 1,
//!         "color": [9, 0, 0], "specular": 600, "reflectiveness": 2 }
//!     ],
//!     "lights": [
//!       { "name": "key", "intensity": 8, "position": [2, 2, 0] }
//!     ]
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::settings::RenderSettings;

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid entry {name}: {message}")]
    Invalid { name: String, message: String },

    #[error("Duplicate entry name: {0}")]
    DuplicateName(String),

    #[error("Unknown catalog entry: {0}")]
    UnknownEntry(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl SceneError {
    pub(crate) fn invalid(name: &str, message: impl Into<String>) -> Self {
        SceneError::Invalid {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// On-disk scene description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub settings: RenderSettings,
    pub catalog: Catalog,
}

impl SceneFile {
    /// The built-in catalog with default settings.
    pub fn default_scene() -> Self {
        Self {
            settings: RenderSettings::default(),
            catalog: Catalog::default_scene(),
        }
    }

    /// Check settings and catalog.
    pub fn validate(&self) -> SceneResult<()> {
        if self.settings.width == 0 || self.settings.height == 0 {
            return Err(SceneError::InvalidSettings(format!(
                "image size must be non-zero, got {}x{}",
                self.settings.width, self.settings.height
            )));
        }
        if !self.settings.camera.is_finite() {
            return Err(SceneError::InvalidSettings(
                "camera position must be finite".to_string(),
            ));
        }
        self.catalog.validate()
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scene file to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SceneResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(source: &str) -> SceneResult<SceneFile> {
    let file: SceneFile = serde_json::from_str(source)?;
    file.validate()?;

    log::info!(
        "Loaded catalog with {} primitives and {} lights",
        file.catalog.primitives.len(),
        file.catalog.lights.len()
    );

    Ok(file)
}

/// Load and validate a JSON scene file.
pub fn load_scene_file<P: AsRef<Path>>(path: P) -> SceneResult<SceneFile> {
    let path = path.as_ref();
    log::debug!("Reading scene file {}", path.display());
    let source = fs::read_to_string(path)?;
    load_scene_from_str(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;
    use whitted_math::Vec3;

    const SIMPLE: &str = r#"{
        "settings": { "width": 64, "height": 32, "depth": 1 },
        "catalog": {
            "primitives": [
                { "name": "ball", "type": "sphere", "center": [0, 0, 5], "radius": 1,
                  "color": [9, 0, 0], "specular": 600, "reflectiveness": 2 },
                { "name": "floor", "enabled": false, "type": "plane",
                  "point": [0, -1, 0], "normal": [0, 1, 0],
                  "color": [9, 9, 0], "specular": 0, "reflectiveness": 0 }
            ],
            "lights": [
                { "name": "key", "intensity": 8, "position": [2, 2, 0] }
            ]
        }
    }"#;

    #[test]
    fn test_load_simple_scene() {
        let _ = env_logger::builder().is_test(true).try_init();
        let file = load_scene_from_str(SIMPLE).unwrap();

        assert_eq!(file.settings.width, 64);
        assert_eq!(file.settings.height, 32);
        assert_eq!(file.settings.depth, 1);
        assert_eq!(file.settings.camera, Vec3::new(0.0, 1.0, 0.0));

        let scene = file.catalog.scene();
        assert_eq!(scene.primitive_count(), 1);
        assert_eq!(scene.light_count(), 1);
        match scene.primitives[0] {
            Primitive::Sphere(sphere) => {
                assert_eq!(sphere.center, Vec3::new(0.0, 0.0, 5.0));
                assert_eq!(sphere.radius, 1.0);
                assert_eq!(sphere.surface.reflectiveness, 2.0);
            }
            other => panic!("expected sphere, got {:?}", other),
        }
        assert_eq!(file.catalog.is_enabled("floor"), Some(false));
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let file = load_scene_from_str(r#"{ "catalog": { "primitives": [] } }"#).unwrap();
        assert_eq!(file.settings, RenderSettings::default());
        assert!(file.catalog.scene().is_empty());
    }

    #[test]
    fn test_default_scene_roundtrip() {
        let original = SceneFile::default_scene();
        let json = original.to_json().unwrap();
        let loaded = load_scene_from_str(&json).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_parse_error() {
        let err = load_scene_from_str("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_invalid_settings() {
        let err = load_scene_from_str(r#"{ "settings": { "width": 0 }, "catalog": {} }"#)
            .unwrap_err();
        assert!(matches!(err, SceneError::InvalidSettings(_)));
    }

    #[test]
    fn test_invalid_radius() {
        let source = r#"{ "catalog": { "primitives": [
            { "name": "bad", "type": "sphere", "center": [0, 0, 5], "radius": -1,
              "color": [1, 1, 1], "specular": 0, "reflectiveness": 0 }
        ] } }"#;

        let err = load_scene_from_str(source).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_scene_file("/nonexistent/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
