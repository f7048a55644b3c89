use thiserror::Error;

/// Result type for ctview operations
pub type Result<T> = std::result::Result<T, CtViewError>;

/// Error types for the decoding and windowing engine
///
/// All variants stem from deterministic input defects, so none of them is
/// worth retrying with the same input.
#[derive(Error, Debug)]
pub enum CtViewError {
    /// Required identifying or pixel-description tags are absent
    #[error("validation failed: missing required tags [{}]", missing.join(", "))]
    MissingTags { missing: Vec<&'static str> },

    /// Pixel payload length does not match the declared geometry
    #[error("validation failed: size_mismatch (expected {expected} pixel bytes, found {actual})")]
    SizeMismatch { expected: usize, actual: usize },

    /// A tag that must be numeric carries an unparseable value
    #[error("malformed tag {tag}: cannot interpret {raw_value:?}")]
    MalformedTag {
        tag: &'static str,
        raw_value: String,
    },

    /// Window width resolved to zero or a negative value
    #[error("invalid_window: window width must be positive, got {width}")]
    InvalidWindow { width: f64 },

    /// Preset name outside the fixed table
    #[error("unknown preset: {name:?}")]
    UnknownPreset { name: String },

    /// DICOM reading error (CLI file path only)
    #[error("DICOM error: {0}")]
    DicomRead(#[from] dicom_object::ReadError),
}
