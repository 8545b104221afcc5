// Re-export glam for convenience
pub use glam::*;

// Whitted math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// RGB color with unbounded channels.
pub type Color = Vec3;
