//! Window/level rendering of density grids into 8-bit rasters

use crate::error::{CtViewError, Result};
use crate::types::{DensityGrid, Raster, WindowSpec};

/// Clips and normalizes a density grid into an 8-bit raster
///
/// Per sample `d`, with `low = level - width/2` and `high = level + width/2`:
/// clamp to `[low, high]`, normalize to `0..=255`, then invert the byte when
/// the slice polarity is inverted (MONOCHROME1). Rounding is
/// round-half-to-even, so the same grid and window always produce a
/// bit-identical raster.
///
/// # Errors
///
/// `InvalidWindow` when the width is zero, negative, or not finite. No
/// substitute width is guessed; presets are positive by construction, so
/// only a malformed image-embedded default reaches this failure.
pub fn apply_window(grid: &DensityGrid, window: WindowSpec, inverted: bool) -> Result<Raster> {
    if !window.is_displayable() {
        return Err(CtViewError::InvalidWindow {
            width: window.width,
        });
    }

    let (low, high) = window.bounds();
    let span = high - low;

    let bytes = grid
        .samples()
        .iter()
        .map(|&d| {
            let clipped = f64::from(d).clamp(low, high);
            // Multiply before dividing so half-way values stay exact
            let byte = ((clipped - low) * 255.0 / span).round_ties_even() as u8;
            if inverted {
                255 - byte
            } else {
                byte
            }
        })
        .collect();

    Ok(Raster::new(grid.rows(), grid.columns(), bytes))
}
