//! Error types for configuration validation.

use thiserror::Error;

/// Errors detected while validating camera configuration.
///
/// All of these are caught before the render pass starts; nothing in the
/// per-pixel pipeline itself can fail.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Image width below 2 pixels would divide by zero in the u mapping.
    #[error("image width must be at least 2 pixels, got {0}")]
    ImageTooNarrow(u32),

    /// Aspect ratio must be a finite positive number.
    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f32),

    /// A non-positive viewport would produce zero-length ray directions.
    #[error("viewport height must be finite and positive, got {0}")]
    InvalidViewportHeight(f32),

    /// A non-positive focal length puts the image plane behind the camera.
    #[error("focal length must be finite and positive, got {0}")]
    InvalidFocalLength(f32),
}
