use crate::error::{CtViewError, Result};
use crate::types::{DensityGrid, PixelRepresentation};
use dicom_object::InMemDicomObject;
use std::borrow::Cow;

use super::rescale::extract_rescale;
use super::tags::{
    optional_u16, require_u16, BITS_ALLOCATED, COLUMNS, PIXEL_DATA, PIXEL_REPRESENTATION, ROWS,
};

/// Decodes the pixel payload into calibrated density samples
///
/// Reads the stored integer samples (8- or 16-bit little-endian, signed or
/// unsigned per PixelRepresentation) and applies the per-file linear
/// calibration `density = raw * slope + intercept`. Precision is kept in
/// floating point; the window/level renderer does the only rounding.
///
/// Callers are expected to have run `validate` first, so the payload
/// length is trusted to match the declared geometry.
pub fn decode_densities(dcm: &InMemDicomObject) -> Result<DensityGrid> {
    let rows = require_u16(dcm, ROWS, "Rows")? as usize;
    let columns = require_u16(dcm, COLUMNS, "Columns")? as usize;
    let bits_allocated = require_u16(dcm, BITS_ALLOCATED, "BitsAllocated")?;
    let representation = PixelRepresentation::from_tag_value(
        optional_u16(dcm, PIXEL_REPRESENTATION, "PixelRepresentation")?.unwrap_or(0),
    );
    let (slope, intercept) = extract_rescale(dcm)?;

    let payload = pixel_payload(dcm)?;
    let raw = decode_raw_samples(&payload, bits_allocated, representation)?;
    debug_assert_eq!(raw.len(), rows * columns);

    Ok(rescale_densities(rows, columns, raw, slope, intercept))
}

/// Raw pixel payload bytes
pub(crate) fn pixel_payload(dcm: &InMemDicomObject) -> Result<Cow<'_, [u8]>> {
    let elem = dcm
        .element(PIXEL_DATA)
        .map_err(|_| CtViewError::MissingTags {
            missing: vec!["PixelData"],
        })?;
    elem.to_bytes().map_err(|_| CtViewError::MalformedTag {
        tag: "PixelData",
        raw_value: String::new(),
    })
}

/// Decodes stored samples to f32, without calibration
fn decode_raw_samples(
    bytes: &[u8],
    bits_allocated: u16,
    representation: PixelRepresentation,
) -> Result<Vec<f32>> {
    match (bits_allocated, representation) {
        (8, PixelRepresentation::Unsigned) => Ok(bytes.iter().map(|&b| f32::from(b)).collect()),
        (8, PixelRepresentation::Signed) => {
            Ok(bytes.iter().map(|&b| f32::from(b as i8)).collect())
        }
        (16, PixelRepresentation::Unsigned) => Ok(bytes
            .chunks_exact(2)
            .map(|pair| f32::from(u16::from_le_bytes([pair[0], pair[1]])))
            .collect()),
        (16, PixelRepresentation::Signed) => Ok(bytes
            .chunks_exact(2)
            .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])))
            .collect()),
        (other, _) => Err(CtViewError::MalformedTag {
            tag: "BitsAllocated",
            raw_value: other.to_string(),
        }),
    }
}

/// Applies the linear calibration element-wise
fn rescale_densities(
    rows: usize,
    columns: usize,
    raw: Vec<f32>,
    slope: f64,
    intercept: f64,
) -> DensityGrid {
    if slope == 1.0 && intercept == 0.0 {
        // Identity calibration: density == raw
        return DensityGrid::new(rows, columns, raw);
    }
    let samples = raw
        .into_iter()
        .map(|value| (f64::from(value) * slope + intercept) as f32)
        .collect();
    DensityGrid::new(rows, columns, samples)
}
