//! Window presentation of the finished frame.
//!
//! The render pass runs exactly once; this loop only re-presents the static
//! buffer every tick until the user closes the window.

use std::time::Duration;

use log::info;
use minifb::{Key, Window, WindowOptions};

use crate::framebuffer::FrameBuffer;

/// Open a window and present the frame until it is closed or Escape is hit.
///
/// minifb consumes the buffer in the same layout the framebuffer stores it:
/// flat u32 ARGB words, top row first.
pub fn present(frame: &FrameBuffer, title: &str) -> Result<(), minifb::Error> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;

    let mut window = Window::new(title, width, height, WindowOptions::default())?;
    window.limit_update_rate(Some(Duration::from_micros(16_600)));

    info!("Presenting {}x{} frame; close the window or press Escape to exit", width, height);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(frame.pixels(), width, height)?;
    }

    Ok(())
}
