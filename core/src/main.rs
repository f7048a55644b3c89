use clap::Parser;
use ctview_core::cli::{Cli, OutputFormat};
use ctview_core::{
    extract_metadata, render, validate, InstanceMetadata, Raster, TextReport, WindowSelection,
    WindowSpec,
};
use dicom_object::open_file;
use image::GrayImage;
use log::{error, info};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let obj = match open_file(&cli.file) {
        Ok(obj) => obj,
        Err(e) => {
            error!("Failed to read {}: {}", cli.file.display(), e);
            eprintln!("Error: Failed to read {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };
    info!("Loaded {}", cli.file.display());

    if let Err(e) = validate(&obj) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if cli.preset.is_some() || cli.window.is_some() {
        let selection = build_selection(cli.preset.as_deref(), cli.window, cli.level);
        info!("Rendering with selection {:?}", selection);

        let raster = match render(&obj, &selection) {
            Ok(raster) => raster,
            Err(e) => {
                eprintln!("Error: {}", e);
                if matches!(e, ctview_core::CtViewError::UnknownPreset { .. }) {
                    let names: Vec<_> = ctview_core::preset_names().collect();
                    eprintln!("Available presets: {}", names.join(", "));
                }
                process::exit(1);
            }
        };

        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| cli.file.with_extension("png"));
        if let Err(e) = write_png(&raster, cli.thumbnail, &output) {
            error!("Failed to write {}: {}", output.display(), e);
            eprintln!("Error: Failed to write {}: {}", output.display(), e);
            process::exit(1);
        }
        info!("Wrote {}", output.display());
    } else {
        let metadata = match extract_metadata(&obj) {
            Ok(metadata) => metadata,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        output_metadata(&metadata, cli.format);
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Maps the CLI window arguments to a render selection
///
/// An explicit --window/--level pair wins over --preset; a bare render
/// request falls back to the "default" preset, which in turn prefers the
/// image-embedded window when one is present.
fn build_selection(preset: Option<&str>, window: Option<f64>, level: Option<f64>) -> WindowSelection {
    match (window, level) {
        (Some(width), Some(level)) => WindowSelection::Explicit(WindowSpec::new(width, level)),
        _ => WindowSelection::preset(preset.unwrap_or("default")),
    }
}

fn write_png(
    raster: &Raster,
    thumbnail: Option<u32>,
    path: &Path,
) -> Result<(), image::ImageError> {
    let img = GrayImage::from_raw(
        raster.columns() as u32,
        raster.rows() as u32,
        raster.clone().into_bytes(),
    )
    .expect("raster byte count matches its dimensions");

    let img = match thumbnail {
        Some(size) => downscale(&img, size),
        None => img,
    };
    img.save_with_format(path, image::ImageFormat::Png)
}

/// Downscales so the longest edge is `size` pixels; never upscales
fn downscale(img: &GrayImage, size: u32) -> GrayImage {
    let (width, height) = img.dimensions();
    let longest = width.max(height);
    if longest <= size || size == 0 {
        return img.clone();
    }
    let scale = f64::from(size) / f64::from(longest);
    let new_width = ((f64::from(width) * scale).round() as u32).max(1);
    let new_height = ((f64::from(height) * scale).round() as u32).max(1);
    image::imageops::resize(img, new_width, new_height, image::imageops::FilterType::Triangle)
}

fn output_metadata(metadata: &InstanceMetadata, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(metadata);
            println!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(metadata) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
