//! The frame builder: a single render pass over every pixel.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::framebuffer::{pack_color, FrameBuffer};
use crate::shader::PixelShader;

/// Render one frame: camera -> shader -> quantizer for every pixel.
///
/// Camera-space rows run bottom-up (v = 0 at the bottom), the buffer runs
/// top-down, so scanline y lands at buffer row height - 1 - y. Buffer rows are
/// disjoint slices and every pixel is a pure computation, which makes the pass
/// row-parallel without any locking. The pass is idempotent: same camera and
/// shader, byte-identical buffer.
pub fn render(camera: &Camera, shader: &dyn PixelShader) -> FrameBuffer {
    let width = camera.image_width;
    let height = camera.image_height;
    let mut frame = FrameBuffer::new(width, height);

    info!(
        "Rendering {}x{} using {} CPU cores...",
        width,
        height,
        rayon::current_num_threads()
    );
    let render_start = std::time::Instant::now();
    let pb = ProgressBar::new(height as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .unwrap(),
    );

    frame
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, scanline)| {
            let y = height - 1 - row as u32;
            let v = y as f32 / (height - 1) as f32;
            for (x, pixel) in scanline.iter_mut().enumerate() {
                let u = x as f32 / (width - 1) as f32;
                let ray = camera.ray_at(u, v);
                *pixel = pack_color(shader.shade(&ray));
            }
            pb.inc(1);
        });

    pb.finish();
    info!("Frame rendered in {:.2?}", render_start.elapsed());

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraConfig;
    use crate::ray::Ray;
    use crate::shader::{Color, SkyGradient};
    use glam::Vec3A;

    /// Paints red below the horizon and blue above it.
    struct HorizonSplit;

    impl PixelShader for HorizonSplit {
        fn shade(&self, ray: &Ray) -> Color {
            if ray.direction.y < 0.0 {
                Vec3A::new(1.0, 0.0, 0.0)
            } else {
                Vec3A::new(0.0, 0.0, 1.0)
            }
        }
    }

    fn default_camera() -> Camera {
        Camera::new(CameraConfig::default()).unwrap()
    }

    #[test]
    fn test_bottom_scanline_lands_in_last_buffer_row() {
        let camera = default_camera();
        let frame = render(&camera, &HorizonSplit);
        let w = frame.width();
        let h = frame.height();

        // Camera-space y = 0 points below the horizon, so the red scanline
        // must occupy the last buffer row; the top scanline the first.
        for x in 0..w {
            assert_eq!(frame.pixel(x, h - 1), 0xFFFF_0000);
            assert_eq!(frame.pixel(x, 0), 0xFF00_00FF);
        }
    }

    #[test]
    fn test_alpha_opaque_everywhere() {
        let frame = render(&default_camera(), &SkyGradient);
        assert!(frame.pixels().iter().all(|px| px >> 24 == 0xFF));
    }

    #[test]
    fn test_render_is_idempotent() {
        let camera = default_camera();
        let first = render(&camera, &SkyGradient);
        let second = render(&camera, &SkyGradient);
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_by_two_boundary() {
        let camera = Camera::new(CameraConfig {
            image_width: 2,
            aspect_ratio: 1.0,
            ..CameraConfig::default()
        })
        .unwrap();
        let frame = render(&camera, &SkyGradient);

        assert_eq!(frame.pixels().len(), 4);
        // u and v hit exactly 0 and 1; every pixel must be finite and opaque.
        for px in frame.pixels() {
            assert_eq!(px >> 24, 0xFF);
        }
    }

    #[test]
    fn test_gradient_orientation() {
        let frame = render(&default_camera(), &SkyGradient);
        let h = frame.height();

        let channels = |px: u32| {
            Vec3A::new(
                (px >> 16 & 0xFF) as f32,
                (px >> 8 & 0xFF) as f32,
                (px & 0xFF) as f32,
            ) / 255.0
        };
        let white = Vec3A::new(1.0, 1.0, 1.0);
        let sky_blue = Vec3A::new(0.5, 0.7, 1.0);

        let top = channels(frame.pixel(0, 0));
        let bottom = channels(frame.pixel(0, h - 1));

        assert!((top - sky_blue).length() < (bottom - sky_blue).length());
        assert!((bottom - white).length() < (top - white).length());
    }

    #[test]
    fn test_end_to_end_default_frame() {
        // 400x225, origin zero, viewport height 2, focal length 1. The
        // top-left ray is (-16/9, 1, -1); after normalization its blend
        // factor is ~0.72, which quantizes to (163, 200, 255). The
        // bottom-left mirrors it at ~0.28, giving (220, 234, 255).
        let frame = render(&default_camera(), &SkyGradient);
        assert_eq!(frame.width(), 400);
        assert_eq!(frame.height(), 225);

        assert_eq!(frame.pixel(0, 0), 0xFFA3_C8FF);
        assert_eq!(frame.pixel(0, 224), 0xFFDC_EAFF);
        // Blue stays saturated across the whole gradient.
        assert!(frame.pixels().iter().all(|px| (px & 0xFF) == 0xFF));
    }
}
