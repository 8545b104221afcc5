//! Core Whitted ray tracer.
//!
//! Implements:
//! - Ambient + diffuse + Phong-style specular from every unshadowed light
//! - Hard shadows via one shadow ray per light
//! - Recursive mirror reflection blended by surface reflectiveness

use crate::camera::primary_ray;
use crate::hittable::{closest_intersection, SceneHit};
use whitted_core::{RenderSettings, Scene, ShadingModel};
use whitted_math::{Color, Interval, Ray, Vec3};

/// Shadow rays stop at the light: t = 1 is the light position.
const SHADOW_T_MAX: f32 = 1.0;

/// Compute the color seen by a ray.
///
/// `ray_t` bounds the accepted hit distance and `depth` is the number of
/// reflection bounces still allowed. Returns black when nothing is hit.
/// Channels are unbounded; degenerate geometry yields non-finite values
/// rather than an error.
pub fn trace_ray(
    scene: &Scene,
    ray: &Ray,
    ray_t: Interval,
    depth: u32,
    model: &ShadingModel,
) -> Color {
    let Some(hit) = closest_intersection(scene, ray, ray_t, model) else {
        return Color::ZERO;
    };

    let surface = hit.primitive.surface();
    let local_color = surface.color * (light_intensity(scene, ray, &hit, model) * model.tone_scale);

    if depth == 0 {
        return local_color;
    }

    let normal = hit.record.normal;
    let n = normal.dot(normal);
    let reflection = ray.direction() + normal * (-2.0 * normal.dot(ray.direction()) / n);
    let reflected_color = trace_ray(
        scene,
        &Ray::new(hit.record.p, reflection),
        Interval::new(model.epsilon, model.reflection_t_max),
        depth - 1,
        model,
    );

    let reflectance = surface.reflectance(model.reflectiveness_scale);
    reflected_color * reflectance + local_color * (1.0 - reflectance)
}

/// Ambient level plus the diffuse and specular terms of every light the
/// hit point can see.
fn light_intensity(scene: &Scene, ray: &Ray, hit: &SceneHit, model: &ShadingModel) -> f32 {
    let normal = hit.record.normal;
    // Squared normal length stands in for normalizing it
    let n = normal.dot(normal);
    let specular_exponent = hit.primitive.surface().specular;

    let mut intensity = model.ambient;
    for light in &scene.lights {
        let to_light = light.position - hit.record.p;

        let shadow_ray = Ray::new(hit.record.p, to_light);
        let shadow_t = Interval::new(model.epsilon, SHADOW_T_MAX);
        if closest_intersection(scene, &shadow_ray, shadow_t, model).is_some() {
            continue;
        }

        let (diffuse, specular) = light_terms(normal, n, to_light, ray.direction(), specular_exponent);
        intensity += light.intensity * (diffuse + specular);
    }

    intensity
}

/// Diffuse and specular factors for one unoccluded light.
///
/// Diffuse is the cosine between normal and light direction and is not
/// clamped: a light behind a plane subtracts. Specular raises the cosine
/// between the mirrored light vector and the view direction to the
/// exponent, floored at zero; a NaN result is passed through.
fn light_terms(normal: Vec3, n: f32, to_light: Vec3, direction: Vec3, exponent: f32) -> (f32, f32) {
    let facing_ratio = normal.dot(to_light);
    let diffuse = facing_ratio / (to_light.dot(to_light) * n).sqrt();

    let mirrored = to_light + normal * (-2.0 * facing_ratio / n);
    let cosine = mirrored.dot(direction) / (mirrored.dot(mirrored) * direction.dot(direction)).sqrt();
    let highlight = cosine.powf(exponent);
    let specular = if highlight < 0.0 { 0.0 } else { highlight };

    (diffuse, specular)
}

/// Convert a color to 8-bit RGBA.
///
/// Channels are clamped to [0, 255] and rounded half to even; NaN becomes
/// 0. Alpha is always opaque.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |channel: f32| {
        if channel.is_nan() {
            0
        } else {
            Interval::BYTE.clamp(channel).round_ties_even() as u8
        }
    };

    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Trace the primary ray of pixel (x, y).
pub fn render_pixel(scene: &Scene, settings: &RenderSettings, x: u32, y: u32) -> Color {
    let ray = primary_ray(settings, x, y);
    let ray_t = Interval::new(settings.shading.epsilon, settings.primary_t_max());
    trace_ray(scene, &ray, ray_t, settings.depth, &settings.shading)
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Unclamped colors in row-major order
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; see `render_parallel` for the bucketed version.
pub fn render(scene: &Scene, settings: &RenderSettings) -> ImageBuffer {
    let mut image = ImageBuffer::new(settings.width, settings.height);

    for y in 0..settings.height {
        for x in 0..settings.width {
            image.set(x, y, render_pixel(scene, settings, x, y));
        }
    }

    image
}
