use crate::error::{CtViewError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Physical pixel spacing in millimeters (row, column)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct PixelSpacing {
    pub row: f64,
    pub col: f64,
}

impl PixelSpacing {
    /// Creates a new PixelSpacing
    pub fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Parses the PixelSpacing tag value
    ///
    /// The DICOM encoding is two backslash-separated decimal strings, but
    /// exporters also produce space- or comma-separated variants, so any
    /// two leading numeric tokens are accepted.
    ///
    /// # Errors
    ///
    /// Returns `CtViewError::MalformedTag` when fewer than two numeric
    /// values can be read from the string.
    pub fn parse(s: &str) -> Result<Self> {
        static NUMBER: OnceLock<Regex> = OnceLock::new();
        let number = NUMBER.get_or_init(|| {
            Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
        });

        let values: Vec<f64> = number
            .find_iter(s)
            .take(2)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();

        match values[..] {
            [row, col] => Ok(PixelSpacing { row, col }),
            _ => Err(CtViewError::MalformedTag {
                tag: "PixelSpacing",
                raw_value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PixelSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} mm", self.row, self.col)
    }
}
