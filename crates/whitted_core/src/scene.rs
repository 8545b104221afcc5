//! Scene types for the Whitted tracer.
//!
//! A `Scene` is an ordered list of primitives and an ordered list of point
//! lights. It carries no spatial index; the renderer scans it linearly, so
//! primitive order is part of the observable result when two hits tie.

use serde::{Deserialize, Serialize};
use whitted_math::{Color, Vec3};

/// Shading attributes shared by every primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Base color, channels roughly 0-9 before tone scaling
    pub color: Color,

    /// Phong specular exponent (0 = no highlight falloff)
    pub specular: f32,

    /// Mirror contribution on a 0-9 scale
    pub reflectiveness: f32,
}

impl Surface {
    /// Create a new surface.
    pub fn new(color: Color, specular: f32, reflectiveness: f32) -> Self {
        Self {
            color,
            specular,
            reflectiveness,
        }
    }

    /// Fraction of the final color taken from the reflected ray.
    ///
    /// `scale` is the top of the reflectiveness range (9 by default).
    #[inline]
    pub fn reflectance(&self, scale: f32) -> f32 {
        self.reflectiveness / scale
    }
}

/// A sphere primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    #[serde(flatten)]
    pub surface: Surface,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }
}

/// An infinite plane through `point` with unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    #[serde(flatten)]
    pub surface: Surface,
}

impl Plane {
    /// Create a new plane. The normal is stored as given.
    pub fn new(point: Vec3, normal: Vec3, surface: Surface) -> Self {
        Self {
            point,
            normal,
            surface,
        }
    }
}

/// Closed set of renderable primitives.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Shading attributes of the primitive.
    pub fn surface(&self) -> &Surface {
        match self {
            Primitive::Sphere(sphere) => &sphere.surface,
            Primitive::Plane(plane) => &plane.surface,
        }
    }

    /// Short lowercase kind name, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

/// A point light. No distance attenuation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub intensity: f32,
    pub position: Vec3,
}

impl Light {
    /// Create a new point light.
    pub fn new(intensity: f32, position: Vec3) -> Self {
        Self {
            intensity,
            position,
        }
    }
}

/// The primitives and lights seen by one render pass.
///
/// Renderers only ever borrow a `Scene` immutably, so a single snapshot can
/// be shared across worker threads for the whole pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Primitives in scan order
    pub primitives: Vec<Primitive>,

    /// Lights in summation order
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive and return its index.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) -> usize {
        let index = self.primitives.len();
        self.primitives.push(primitive.into());
        index
    }

    /// Append a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get a primitive by index.
    pub fn primitive(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    /// Get primitive count.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// True when there is nothing to hit.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matte(color: Color) -> Surface {
        Surface::new(color, 0.0, 0.0)
    }

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());

        let first = scene.add_primitive(Sphere::new(Vec3::ZERO, 1.0, matte(Color::X)));
        let second = scene.add_primitive(Plane::new(Vec3::ZERO, Vec3::Y, matte(Color::Y)));
        scene.add_light(Light::new(8.0, Vec3::new(2.0, 2.0, 0.0)));

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.primitive(1).map(Primitive::kind), Some("plane"));
        assert!(scene.primitive(2).is_none());
    }

    #[test]
    fn test_reflectance_normalization() {
        let surface = Surface::new(Color::ONE, 600.0, 4.5);
        assert_eq!(surface.reflectance(9.0), 0.5);

        let mirror = Surface::new(Color::ONE, 600.0, 9.0);
        assert_eq!(mirror.reflectance(9.0), 1.0);
    }

    #[test]
    fn test_primitive_surface_access() {
        let surface = Surface::new(Color::new(9.0, 0.0, 0.0), 600.0, 2.0);
        let primitive: Primitive = Sphere::new(Vec3::Z, 1.0, surface).into();

        assert_eq!(primitive.surface(), &surface);
        assert_eq!(primitive.kind(), "sphere");
    }

    #[test]
    fn test_primitive_json_shape() {
        let json = r#"{
            "type": "plane",
            "point": [0.0, -1.0, 0.0],
            "normal": [0.0, 1.0, 0.0],
            "color": [9.0, 9.0, 0.0],
            "specular": 600.0,
            "reflectiveness": 0.0
        }"#;

        let primitive: Primitive = serde_json::from_str(json).unwrap();
        match primitive {
            Primitive::Plane(plane) => {
                assert_eq!(plane.point, Vec3::new(0.0, -1.0, 0.0));
                assert_eq!(plane.normal, Vec3::Y);
                assert_eq!(plane.surface.color, Color::new(9.0, 9.0, 0.0));
            }
            other => panic!("expected plane, got {:?}", other),
        }
    }
}
