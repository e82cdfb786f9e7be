use clap::Parser;
use glam::Vec3A;
use log::info;

use skytrace::camera::{Camera, CameraConfig};
use skytrace::cli::Args;
use skytrace::logger::init_logger;
use skytrace::output::save_frame_as_png;
use skytrace::shader::SkyGradient;
use skytrace::{display, renderer};

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("SkyTrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let config = CameraConfig {
        image_width: args.width,
        aspect_ratio: args.aspect_ratio,
        viewport_height: args.viewport_height,
        focal_length: args.focal_length,
        origin: Vec3A::ZERO,
    };

    // Degenerate geometry is rejected here, before any pixel is touched.
    let camera = match Camera::new(config) {
        Ok(camera) => camera,
        Err(e) => {
            log::error!("Invalid camera configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Image resolution: {}x{} ({} bytes per row)",
        camera.image_width,
        camera.image_height,
        camera.image_width * 4
    );

    // Compute the frame exactly once; everything after this only re-reads it.
    let frame = renderer::render(&camera, &SkyGradient);

    if let Some(path) = args.output.as_deref() {
        if path.ends_with(".png") {
            save_frame_as_png(&frame, path);
        } else {
            log::error!(
                "Unsupported file extension '{}'. Only the .png format is supported.",
                std::path::Path::new(path)
                    .extension()
                    .unwrap_or_default()
                    .to_string_lossy()
            );
            std::process::exit(1);
        }
    }

    if !args.headless {
        if let Err(e) = display::present(&frame, "Ray Tracing") {
            log::error!("Window presentation failed: {}", e);
            std::process::exit(1);
        }
    }
}
