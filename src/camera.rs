//! Pinhole camera mapping normalized screen coordinates to rays.

use glam::Vec3A;

use crate::error::ConfigError;
use crate::ray::Ray;

/// User-facing camera parameters, validated once at startup.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// Rendered image width in pixels (must be >= 2).
    pub image_width: u32,
    /// Width over height of the image; the image height is derived from it.
    pub aspect_ratio: f32,
    /// Height of the virtual viewport rectangle in world units.
    pub viewport_height: f32,
    /// Distance from the camera origin to the image plane.
    pub focal_length: f32,
    /// Camera position in world space.
    pub origin: Vec3A,
}

impl Default for CameraConfig {
    /// Default: 400x225 image (16:9), viewport height 2, focal length 1,
    /// origin at zero.
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            viewport_height: 2.0,
            focal_length: 1.0,
            origin: Vec3A::ZERO,
        }
    }
}

/// Pinhole camera looking down -z with the image plane at z = -focal_length.
///
/// Viewport geometry is precomputed at construction; `ray_at` is then a pure
/// function of the normalized screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rendered image width in pixel count.
    pub image_width: u32,
    /// Rendered image height in pixel count, derived as
    /// round(width / aspect_ratio) and clamped to at least 2.
    pub image_height: u32,
    /// Camera position in world space.
    pub origin: Vec3A,

    /// Vector spanning the viewport's horizontal edge (viewport_width, 0, 0).
    horizontal: Vec3A,
    /// Vector spanning the viewport's vertical edge (0, viewport_height, 0).
    vertical: Vec3A,
    /// World position of the viewport corner at (u, v) = (0, 0).
    lower_left_corner: Vec3A,
}

impl Camera {
    /// Validate the configuration and precompute the viewport geometry.
    ///
    /// Fails fast on degenerate geometry: a width below 2 pixels would divide
    /// by zero in the u/v mapping, and non-positive viewport or focal values
    /// would produce zero-length ray directions that the shader cannot
    /// normalize.
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        if config.image_width < 2 {
            return Err(ConfigError::ImageTooNarrow(config.image_width));
        }
        if !(config.aspect_ratio.is_finite() && config.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidAspectRatio(config.aspect_ratio));
        }
        if !(config.viewport_height.is_finite() && config.viewport_height > 0.0) {
            return Err(ConfigError::InvalidViewportHeight(config.viewport_height));
        }
        if !(config.focal_length.is_finite() && config.focal_length > 0.0) {
            return Err(ConfigError::InvalidFocalLength(config.focal_length));
        }

        let image_height =
            ((config.image_width as f32 / config.aspect_ratio).round() as u32).max(2);

        let viewport_width = config.aspect_ratio * config.viewport_height;
        let horizontal = Vec3A::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3A::new(0.0, config.viewport_height, 0.0);
        let lower_left_corner = config.origin
            - horizontal / 2.0
            - vertical / 2.0
            - Vec3A::new(0.0, 0.0, config.focal_length);

        Ok(Self {
            image_width: config.image_width,
            image_height,
            origin: config.origin,
            horizontal,
            vertical,
            lower_left_corner,
        })
    }

    /// Generate the ray through the normalized screen coordinate (u, v).
    ///
    /// u and v are expected in [0, 1]; u = 0 is the left edge, v = 0 the
    /// bottom edge of camera space. The returned direction is not normalized.
    pub fn ray_at(&self, u: f32, v: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}
