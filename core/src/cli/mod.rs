pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for ctview
#[derive(Parser, Debug)]
#[command(name = "ctview")]
#[command(about = "DICOM CT slice metadata and window/level rendering tool")]
#[command(version)]
pub struct Cli {
    /// Path to DICOM file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Render the slice to PNG with the named window preset
    #[arg(short, long, value_name = "PRESET")]
    pub preset: Option<String>,

    /// Custom window width in density units (overrides --preset)
    #[arg(long, requires = "level")]
    pub window: Option<f64>,

    /// Custom window level in density units (overrides --preset)
    #[arg(long, requires = "window")]
    pub level: Option<f64>,

    /// Output PNG path (defaults to FILE with a .png extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Downscale the rendered raster so its longest edge is SIZE pixels
    #[arg(short, long, value_name = "SIZE")]
    pub thumbnail: Option<u32>,

    /// Metadata output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
