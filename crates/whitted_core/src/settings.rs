//! Render settings and the fixed constants of the shading model.

use serde::{Deserialize, Serialize};
use whitted_math::Vec3;

/// Minimum accepted ray parameter; keeps rays off their own origin surface.
pub const K_EPSILON: f32 = 0.01;

/// Light level every hit receives before any light is summed.
pub const AMBIENT_LIGHT: f32 = 2.0;

/// Multiplier from accumulated light intensity to output color.
pub const TONE_SCALE: f32 = 2.8;

/// Top of the reflectiveness range; divides it down to [0, 1].
pub const REFLECTIVENESS_SCALE: f32 = 9.0;

/// Far bound for reflected rays.
pub const REFLECTION_T_MAX: f32 = 600.0;

/// Starting "closest so far" distance in the resolver. Hits at or beyond it
/// are never selected, regardless of the interval's upper bound.
pub const INTERSECTION_SENTINEL: f32 = 1000.0;

/// Constants of the local illumination + mirror reflection model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingModel {
    pub epsilon: f32,
    pub ambient: f32,
    pub tone_scale: f32,
    pub reflectiveness_scale: f32,
    pub reflection_t_max: f32,
    pub intersection_sentinel: f32,
}

impl Default for ShadingModel {
    fn default() -> Self {
        Self {
            epsilon: K_EPSILON,
            ambient: AMBIENT_LIGHT,
            tone_scale: TONE_SCALE,
            reflectiveness_scale: REFLECTIVENESS_SCALE,
            reflection_t_max: REFLECTION_T_MAX,
            intersection_sentinel: INTERSECTION_SENTINEL,
        }
    }
}

/// Per-pass render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of reflection bounces after the primary hit
    pub depth: u32,
    /// Origin of every primary ray
    pub camera: Vec3,
    /// Shading constants
    pub shading: ShadingModel,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            depth: 4,
            camera: Vec3::new(0.0, 1.0, 0.0),
            shading: ShadingModel::default(),
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set reflection depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Far bound for primary rays. The image width doubles as the view
    /// distance, so wider renders also see further.
    pub fn primary_t_max(&self) -> f32 {
        self.width as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shading_defaults() {
        let model = ShadingModel::default();
        assert_eq!(model.epsilon, 0.01);
        assert_eq!(model.ambient, 2.0);
        assert_eq!(model.tone_scale, 2.8);
        assert_eq!(model.reflectiveness_scale, 9.0);
        assert_eq!(model.reflection_t_max, 600.0);
        assert_eq!(model.intersection_sentinel, 1000.0);
    }

    #[test]
    fn test_render_settings_builder() {
        let settings = RenderSettings::default()
            .with_resolution(320, 240)
            .with_depth(0);

        assert_eq!(settings.width, 320);
        assert_eq!(settings.height, 240);
        assert_eq!(settings.depth, 0);
        assert_eq!(settings.camera, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(settings.primary_t_max(), 320.0);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{ "depth": 2, "shading": { "ambient": 0.0 } }"#).unwrap();

        assert_eq!(settings.depth, 2);
        assert_eq!(settings.width, 600);
        assert_eq!(settings.shading.ambient, 0.0);
        assert_eq!(settings.shading.tone_scale, TONE_SCALE);
    }
}
