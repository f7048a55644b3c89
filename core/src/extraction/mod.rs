//! Pure extraction stages over an in-memory DICOM object
//!
//! Each stage is a function of its input with no shared mutable state:
//! validation gates the geometry, rescale reads the linear calibration,
//! and pixel decoding produces the calibrated density grid.

pub mod pixels;
pub mod rescale;
pub mod tags;
pub mod validate;

pub use pixels::decode_densities;
pub use rescale::{extract_embedded_window, extract_rescale};
pub use validate::validate;
