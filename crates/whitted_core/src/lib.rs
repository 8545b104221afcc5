//! Whitted Core - Scene description for the recursive ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive` (`Sphere`, `Plane`), `Light`, `Surface`
//! - **Catalog**: a fixed set of named objects with inclusion toggles
//! - **Settings**: `RenderSettings` and the `ShadingModel` constants
//! - **Loading**: JSON scene files with validation
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::{load_scene_file, Catalog};
//!
//! let mut catalog = Catalog::default_scene();
//! catalog.set_enabled("light2", true)?;
//! let scene = catalog.scene();
//! println!("{} primitives, {} lights", scene.primitive_count(), scene.light_count());
//! ```

pub mod catalog;
pub mod loader;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry};
pub use loader::{load_scene_file, load_scene_from_str, SceneError, SceneFile, SceneResult};
pub use scene::{Light, Plane, Primitive, Scene, Sphere, Surface};
pub use settings::{
    RenderSettings, ShadingModel, AMBIENT_LIGHT, INTERSECTION_SENTINEL, K_EPSILON,
    REFLECTION_T_MAX, REFLECTIVENESS_SCALE, TONE_SCALE,
};
