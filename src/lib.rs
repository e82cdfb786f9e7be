//! SkyTrace minimal ray tracer
//!
//! Renders a single static sky-gradient frame into a packed ARGB8888 buffer:
//! camera rays per pixel, a pure shading function, and 8-bit quantization.
//! The finished buffer is presented in a window and optionally saved as PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod logger;
pub mod output;
pub mod ray;
pub mod renderer;
pub mod shader;
