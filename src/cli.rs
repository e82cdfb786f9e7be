//! Command line interface definitions.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Informational messages and above
    Info,
    /// Debug output and above
    Debug,
    /// Everything, including trace output
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "skytrace")]
#[command(about = "A minimal software ray tracer rendering a sky gradient")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, short = 'w', default_value = "400", help = "Image width in pixels (>= 2)")]
    pub width: u32,

    /// Image aspect ratio (width / height); height is derived from it
    #[arg(long, default_value = "1.7777778", help = "Image aspect ratio (width / height)")]
    pub aspect_ratio: f32,

    /// Viewport height in world units
    #[arg(long, default_value = "2.0", help = "Viewport height in world units")]
    pub viewport_height: f32,

    /// Focal length (distance from origin to the image plane)
    #[arg(long, default_value = "1.0", help = "Focal length (distance from origin to the image plane)")]
    pub focal_length: f32,

    /// Output file path (.png); written in addition to the window
    #[arg(short, long, help = "Output file path (.png); written in addition to the window")]
    pub output: Option<String>,

    /// Skip the window and only write the output file
    #[arg(long, help = "Skip the window and only write the output file")]
    pub headless: bool,
}
