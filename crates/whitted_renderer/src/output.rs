//! Image output.

use std::path::Path;

use thiserror::Error;

use crate::renderer::ImageBuffer;

/// Errors that can occur while writing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image buffer size mismatch: {width}x{height} with {len} bytes")]
    BufferSize { width: u32, height: u32, len: usize },
}

/// Result type for output operations.
pub type RenderResult<T> = Result<T, RenderError>;

impl ImageBuffer {
    /// Clamp to 8 bits and wrap as an `image` RGBA buffer.
    pub fn to_rgba_image(&self) -> RenderResult<image::RgbaImage> {
        let bytes = self.to_rgba();
        let len = bytes.len();
        image::RgbaImage::from_raw(self.width, self.height, bytes).ok_or(RenderError::BufferSize {
            width: self.width,
            height: self.height,
            len,
        })
    }

    /// Save as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
