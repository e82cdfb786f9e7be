//! PNG export of a rendered frame.
//!
//! The framebuffer already holds quantized 8-bit channels in top-down row
//! order, so export is a straight unpack of ARGB words into RGBA bytes with
//! no tone mapping.

use image::{ImageBuffer, Rgba};
use log::{info, warn};

use crate::framebuffer::FrameBuffer;

/// Save the frame as an 8-bit RGBA PNG.
///
/// Logs the outcome instead of panicking; a failed save leaves the frame
/// untouched and the program running.
pub fn save_frame_as_png(frame: &FrameBuffer, output_path: &str) {
    let u8_image: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_fn(frame.width(), frame.height(), |x, y| {
            let px = frame.pixel(x, y);
            Rgba([
                (px >> 16 & 0xFF) as u8,
                (px >> 8 & 0xFF) as u8,
                (px & 0xFF) as u8,
                (px >> 24) as u8,
            ])
        });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}
