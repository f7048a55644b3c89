//! Core type definitions for the slice decoding and windowing engine
//!
//! - [`WindowSpec`]: a window/level pair in density units
//! - [`WindowSelection`]: how a render call picks its window
//! - [`DensityGrid`] / [`Raster`]: the intermediate and terminal grids
//! - [`PhotometricInterpretation`] / [`PixelRepresentation`]: pixel flags
//! - [`PixelSpacing`]: physical pixel spacing in mm

mod enums;
mod grid;
mod pixel_spacing;
mod window;

pub use enums::{PhotometricInterpretation, PixelRepresentation};
pub use grid::{DensityGrid, Raster};
pub use pixel_spacing::PixelSpacing;
pub use window::{lookup_preset, preset_names, WindowSelection, WindowSpec, WINDOW_PRESETS};
