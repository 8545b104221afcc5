//! Primary ray generation.
//!
//! The camera is a pinhole at `RenderSettings::camera` looking down +Z. Each
//! pixel gets one ray through a view plane at z = 1; there is no jitter.

use whitted_core::RenderSettings;
use whitted_math::{Ray, Vec3};

/// Direction of the primary ray through pixel (`col`, `row`).
///
/// `x = (col - width/2) / height`, `y = (height/2 - row) / width`, `z = 1`.
/// Row 0 is the top of the image. The horizontal offset is divided by the
/// height and the vertical one by the width, so non-square images stretch.
pub fn pixel_direction(col: u32, row: u32, width: u32, height: u32) -> Vec3 {
    let width = width as f32;
    let height = height as f32;

    let x = (col as f32 - width / 2.0) / height;
    let y = (height / 2.0 - row as f32) / width;
    Vec3::new(x, y, 1.0)
}

/// The primary ray for pixel (`col`, `row`) under `settings`.
#[inline]
pub fn primary_ray(settings: &RenderSettings, col: u32, row: u32) -> Ray {
    Ray::new(
        settings.camera,
        pixel_direction(col, row, settings.width, settings.height),
    )
}
