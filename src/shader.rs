//! Per-pixel color evaluation.
//!
//! The shader is the single extension point of the pipeline: anything that can
//! turn a ray into a color can be plugged into the frame builder without
//! touching it.

use glam::Vec3A;

use crate::ray::Ray;

/// RGB color with float channels, conventionally in [0, 1].
pub type Color = Vec3A;

/// Capability of mapping a ray to a color.
///
/// Implementations must be pure: same ray in, same color out, no side effects.
/// The frame builder calls this from multiple threads.
pub trait PixelShader: Sync {
    /// Evaluate the color seen along `ray`.
    fn shade(&self, ray: &Ray) -> Color;
}

/// Vertical white-to-blue sky gradient.
///
/// The only "scene" there is: no geometry, no intersections, just a blend
/// driven by the ray's vertical direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkyGradient;

impl SkyGradient {
    const WHITE: Color = Vec3A::new(1.0, 1.0, 1.0);
    const SKY_BLUE: Color = Vec3A::new(0.5, 0.7, 1.0);
}

impl PixelShader for SkyGradient {
    /// Blend from white at the bottom to sky blue at the top.
    ///
    /// The ray direction is normalized here (the camera hands it over raw),
    /// then its y component in [-1, 1] is remapped to a blend factor in
    /// [0, 1]. The direction must be nonzero; the camera guarantees that for
    /// any validated configuration.
    fn shade(&self, ray: &Ray) -> Color {
        let unit_direction = ray.direction.normalize();
        let t = 0.5 * (unit_direction.y + 1.0);
        (1.0 - t) * Self::WHITE + t * Self::SKY_BLUE
    }
}
