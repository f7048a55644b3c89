/// Calibrated density samples for one slice, row-major
///
/// Values are in real-world density units (Hounsfield units for CT) and
/// keep full floating-point precision; rounding happens only in the
/// window/level renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    rows: usize,
    columns: usize,
    samples: Vec<f32>,
}

impl DensityGrid {
    /// Creates a grid from row-major samples
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the sample count does not match the
    /// dimensions; callers reach this only through validated geometry.
    pub fn new(rows: usize, columns: usize, samples: Vec<f32>) -> Self {
        debug_assert_eq!(rows * columns, samples.len());
        Self {
            rows,
            columns,
            samples,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample at (row, column)
    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.samples[row * self.columns + column]
    }
}

/// 8-bit grayscale raster, row-major; the engine's terminal output
///
/// Handed to an external codec (PNG in the CLI) for transport encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    rows: usize,
    columns: usize,
    bytes: Vec<u8>,
}

impl Raster {
    /// Creates a raster from row-major bytes
    pub fn new(rows: usize, columns: usize, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(rows * columns, bytes.len());
        Self {
            rows,
            columns,
            bytes,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Pixel at (row, column)
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.bytes[row * self.columns + column]
    }

    /// Consumes the raster, returning the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
