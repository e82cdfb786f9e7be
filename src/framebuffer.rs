//! Packed-pixel framebuffer and color quantization.
//!
//! Pixels are 32-bit ARGB8888 (0xAARRGGBB) with alpha fixed to 0xFF. Rows are
//! stored top-down, which is what display sinks expect, while the camera
//! addresses rows bottom-up; the frame builder reconciles the two.

use crate::shader::Color;

/// Quantize a float color to a packed ARGB8888 pixel.
///
/// Per channel: clamp to [0, 1], scale by 255.999 and truncate. The 0.999
/// offset makes 1.0 land on 255 despite truncation. Without the clamp an
/// out-of-range channel would overflow into the neighboring byte when
/// shifted; clamping silently corrects such input instead.
pub fn pack_color(color: Color) -> u32 {
    let red = (255.999 * color.x.clamp(0.0, 1.0)) as u32;
    let green = (255.999 * color.y.clamp(0.0, 1.0)) as u32;
    let blue = (255.999 * color.z.clamp(0.0, 1.0)) as u32;

    0xFF00_0000 | (red << 16) | (green << 8) | blue
}

/// Flat row-major pixel buffer, top row first.
///
/// Allocated once before the render pass and handed to display sinks by
/// reference afterwards; the sinks see `width * height` packed pixels with a
/// stride of `width * 4` bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer for `width * height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes, for sinks that consume raw memory.
    pub fn stride_bytes(&self) -> usize {
        self.width as usize * 4
    }

    /// Flat view of the packed pixels, top row first.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access for the frame builder; rows are disjoint slices of this.
    pub(crate) fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Packed pixel at image coordinates, (0, 0) being the top-left corner.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3A;

    #[test]
    fn test_quantizer_boundaries() {
        assert_eq!(pack_color(Vec3A::new(0.0, 0.0, 0.0)), 0xFF00_0000);
        assert_eq!(pack_color(Vec3A::new(1.0, 1.0, 1.0)), 0xFFFF_FFFF);
        assert_eq!(pack_color(Vec3A::new(0.5, 0.5, 0.5)), 0xFF7F_7F7F);
    }

    #[test]
    fn test_quantizer_channel_placement() {
        assert_eq!(pack_color(Vec3A::new(1.0, 0.0, 0.0)), 0xFFFF_0000);
        assert_eq!(pack_color(Vec3A::new(0.0, 1.0, 0.0)), 0xFF00_FF00);
        assert_eq!(pack_color(Vec3A::new(0.0, 0.0, 1.0)), 0xFF00_00FF);
    }

    #[test]
    fn test_quantizer_clamps_out_of_range() {
        // Without the clamp these would overflow into neighboring channels.
        assert_eq!(pack_color(Vec3A::new(2.0, 0.0, 0.0)), 0xFFFF_0000);
        assert_eq!(pack_color(Vec3A::new(-1.0, 0.5, 7.5)), 0xFF00_7FFF);
    }

    #[test]
    fn test_alpha_always_opaque() {
        for c in [
            Vec3A::ZERO,
            Vec3A::ONE,
            Vec3A::new(0.25, 0.5, 0.75),
            Vec3A::new(-3.0, 10.0, 0.1),
        ] {
            assert_eq!(pack_color(c) >> 24, 0xFF);
        }
    }

    #[test]
    fn test_buffer_layout() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(fb.pixels().len(), 6);
        assert_eq!(fb.stride_bytes(), 12);
        assert_eq!(fb.width(), 3);
        assert_eq!(fb.height(), 2);
    }
}
