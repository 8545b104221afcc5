//! Whitted Renderer - recursive CPU ray tracing.
//!
//! Local shading (ambient + diffuse + specular from every visible point
//! light) blended with a recursively traced mirror reflection.
//!
//! Every entry point borrows the `Scene` immutably, so a pass can be split
//! across threads without synchronization.

mod bucket;
mod camera;
mod hittable;
mod output;
mod plane;
mod renderer;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, DEFAULT_BUCKET_SIZE};
pub use camera::{pixel_direction, primary_ray};
pub use hittable::{closest_intersection, HitRecord, Hittable, SceneHit};
pub use output::{RenderError, RenderResult};
pub use renderer::{color_to_rgba, render, render_pixel, trace_ray, ImageBuffer};

/// Re-export math and scene types used in the public API
pub use whitted_core::{Light, Plane, Primitive, RenderSettings, Scene, ShadingModel, Sphere, Surface};
pub use whitted_math::{Color, Interval, Ray, Vec3};
