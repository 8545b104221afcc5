//! Named scene objects with inclusion toggles.
//!
//! A catalog is built once. Before each render pass the enabled entries are
//! snapshotted into a `Scene`, in catalog order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use whitted_math::{Color, Vec3};

use crate::loader::{SceneError, SceneResult};
use crate::scene::{Light, Plane, Primitive, Scene, Sphere, Surface};

fn enabled_by_default() -> bool {
    true
}

/// A named catalog item that can be switched in or out of the scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry<T> {
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(flatten)]
    pub item: T,
}

impl<T> CatalogEntry<T> {
    /// Create an enabled entry.
    pub fn new(name: impl Into<String>, item: T) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            item,
        }
    }

    /// Set the initial inclusion state.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Every object a scene can be built from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub primitives: Vec<CatalogEntry<Primitive>>,
    #[serde(default)]
    pub lights: Vec<CatalogEntry<Light>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in demo scene: three spheres over a yellow floor, a grey
    /// mirror wall behind them and two lights, the second one off.
    pub fn default_scene() -> Self {
        let primitives = vec![
            CatalogEntry::new(
                "red_sphere",
                Sphere::new(
                    Vec3::new(-1.0, 0.0, 6.0),
                    1.0,
                    Surface::new(Color::new(9.0, 0.0, 0.0), 600.0, 2.0),
                )
                .into(),
            ),
            CatalogEntry::new(
                "blue_sphere",
                Sphere::new(
                    Vec3::new(2.0, 1.0, 8.0),
                    1.0,
                    Surface::new(Color::new(0.0, 0.0, 9.0), 600.0, 5.0),
                )
                .into(),
            ),
            CatalogEntry::new(
                "green_sphere",
                Sphere::new(
                    Vec3::new(-3.0, 1.0, 8.0),
                    1.0,
                    Surface::new(Color::new(0.0, 9.0, 0.0), 9.0, 4.0),
                )
                .into(),
            ),
            CatalogEntry::new(
                "yellow_plane",
                Plane::new(
                    Vec3::new(0.0, -1.0, 0.0),
                    Vec3::new(0.0, 1.0, 0.0),
                    Surface::new(Color::new(9.0, 9.0, 0.0), 600.0, 0.0),
                )
                .into(),
            ),
            CatalogEntry::new(
                "grey_plane",
                Plane::new(
                    Vec3::new(0.0, 0.0, 20.0),
                    Vec3::new(0.0, 0.0, -1.0),
                    Surface::new(Color::new(2.0, 2.0, 2.0), 600.0, 5.0),
                )
                .into(),
            ),
        ];

        let lights = vec![
            CatalogEntry::new("light1", Light::new(8.0, Vec3::new(2.0, 2.0, 0.0))),
            CatalogEntry::new("light2", Light::new(8.0, Vec3::new(0.0, 0.0, 10.0)))
                .with_enabled(false),
        ];

        Self { primitives, lights }
    }

    /// Switch a primitive or light in or out by name.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> SceneResult<()> {
        let flag = self
            .primitives
            .iter_mut()
            .map(|entry| (&entry.name, &mut entry.enabled))
            .chain(
                self.lights
                    .iter_mut()
                    .map(|entry| (&entry.name, &mut entry.enabled)),
            )
            .find(|(entry_name, _)| entry_name.as_str() == name)
            .map(|(_, flag)| flag)
            .ok_or_else(|| SceneError::UnknownEntry(name.to_string()))?;

        *flag = enabled;
        log::debug!("{} {}", if enabled { "Enabled" } else { "Disabled" }, name);
        Ok(())
    }

    /// Inclusion state of an entry, if it exists.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.primitives
            .iter()
            .map(|entry| (&entry.name, entry.enabled))
            .chain(self.lights.iter().map(|entry| (&entry.name, entry.enabled)))
            .find(|(entry_name, _)| entry_name.as_str() == name)
            .map(|(_, enabled)| enabled)
    }

    /// Snapshot the enabled entries into a scene, preserving catalog order.
    pub fn scene(&self) -> Scene {
        Scene {
            primitives: self
                .primitives
                .iter()
                .filter(|entry| entry.enabled)
                .map(|entry| entry.item)
                .collect(),
            lights: self
                .lights
                .iter()
                .filter(|entry| entry.enabled)
                .map(|entry| entry.item)
                .collect(),
        }
    }

    /// Check the preconditions the renderer relies on but never checks.
    pub fn validate(&self) -> SceneResult<()> {
        let mut names = HashSet::new();
        let all_names = self
            .primitives
            .iter()
            .map(|entry| &entry.name)
            .chain(self.lights.iter().map(|entry| &entry.name));
        for name in all_names {
            if !names.insert(name.as_str()) {
                return Err(SceneError::DuplicateName(name.clone()));
            }
        }

        for entry in &self.primitives {
            validate_primitive(&entry.name, &entry.item)?;
        }

        for entry in &self.lights {
            let intensity = entry.item.intensity;
            if intensity.is_nan() || intensity < 0.0 || !entry.item.position.is_finite() {
                return Err(SceneError::invalid(
                    &entry.name,
                    format!("light intensity must be >= 0, got {}", intensity),
                ));
            }
        }

        Ok(())
    }
}

fn validate_primitive(name: &str, primitive: &Primitive) -> SceneResult<()> {
    match primitive {
        Primitive::Sphere(sphere) => {
            if sphere.radius.is_nan() || sphere.radius <= 0.0 || !sphere.center.is_finite() {
                return Err(SceneError::invalid(
                    name,
                    format!("sphere radius must be > 0, got {}", sphere.radius),
                ));
            }
        }
        Primitive::Plane(plane) => {
            if !plane.point.is_finite() || !plane.normal.is_finite() {
                return Err(SceneError::invalid(name, "plane point and normal must be finite"));
            }
            let length_squared = plane.normal.length_squared();
            if length_squared == 0.0 {
                return Err(SceneError::invalid(name, "plane normal must be non-zero"));
            }
            if (length_squared - 1.0).abs() > 1e-3 {
                log::warn!(
                    "Plane {} has a non-unit normal (length {:.4}); shading assumes unit length",
                    name,
                    length_squared.sqrt()
                );
            }
        }
    }

    let surface = primitive.surface();
    if surface.specular.is_nan() || surface.specular < 0.0 {
        return Err(SceneError::invalid(
            name,
            format!("specular exponent must be >= 0, got {}", surface.specular),
        ));
    }
    if !(0.0..=9.0).contains(&surface.reflectiveness) {
        return Err(SceneError::invalid(
            name,
            format!("reflectiveness must be within [0, 9], got {}", surface.reflectiveness),
        ));
    }

    Ok(())
}
