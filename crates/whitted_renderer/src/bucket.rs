//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are traced independently and
//! in parallel using rayon. Every pixel is a pure function of the scene and
//! settings, so the result matches `render` exactly.

use std::time::Instant;

use rayon::prelude::*;
use whitted_core::{RenderSettings, Scene};
use whitted_math::Color;

use crate::renderer::{render_pixel, ImageBuffer};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Cover the image with buckets in row-major order. Edge buckets are
/// clipped to the image.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket to a vector of colors.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, settings: &RenderSettings) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            pixels.push(render_pixel(
                scene,
                settings,
                bucket.x + local_x,
                bucket.y + local_y,
            ));
        }
    }

    pixels
}

/// Render the entire scene across the rayon thread pool.
pub fn render_parallel(scene: &Scene, settings: &RenderSettings, bucket_size: u32) -> ImageBuffer {
    let buckets = generate_buckets(settings.width, settings.height, bucket_size);
    log::info!(
        "Rendering {}x{} at depth {} in {} buckets ({} primitives, {} lights)",
        settings.width,
        settings.height,
        settings.depth,
        buckets.len(),
        scene.primitive_count(),
        scene.light_count()
    );
    if scene.is_empty() {
        log::warn!("Scene has no primitives; the image will be black");
    }

    let start = Instant::now();
    let results: Vec<(Bucket, Vec<Color>)> = buckets
        .par_iter()
        .map(|bucket| (*bucket, render_bucket(bucket, scene, settings)))
        .collect();

    let mut image = ImageBuffer::new(settings.width, settings.height);
    for (bucket, pixels) in results {
        for (i, color) in pixels.into_iter().enumerate() {
            let i = i as u32;
            image.set(bucket.x + i % bucket.width, bucket.y + i / bucket.width, color);
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}
