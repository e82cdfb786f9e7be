//! Ray value type for per-pixel ray generation.
//!
//! A ray is the half-line r(t) = origin + t * direction. The camera builds one
//! per pixel and the shader consumes it immediately; nothing here is retained.

use glam::Vec3A;

/// Ray defined by an origin point and a direction vector.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray, the camera position for primary rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Stored verbatim, never normalized here: the magnitude encodes the
    /// screen-plane offset for the pixel, and normalization is the shader's
    /// call to make.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction. Accepts any real t.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
