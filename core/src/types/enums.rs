use std::fmt;

/// Photometric interpretation of a monochrome slice
///
/// Determines the display polarity: MONOCHROME1 renders low values light
/// (inverted), MONOCHROME2 renders low values dark. Anything else is kept
/// as `Unknown` and treated as normal polarity; color interpretations are
/// outside the engine's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum PhotometricInterpretation {
    Monochrome1,
    Monochrome2,
    Unknown,
}

impl PhotometricInterpretation {
    /// Returns whether the grayscale output must be inverted (MONOCHROME1)
    pub fn is_inverted(&self) -> bool {
        matches!(self, PhotometricInterpretation::Monochrome1)
    }

    /// Parses the PhotometricInterpretation tag value
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "MONOCHROME1" => PhotometricInterpretation::Monochrome1,
            "MONOCHROME2" => PhotometricInterpretation::Monochrome2,
            _ => PhotometricInterpretation::Unknown,
        }
    }
}

impl fmt::Display for PhotometricInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhotometricInterpretation::Monochrome1 => "MONOCHROME1",
            PhotometricInterpretation::Monochrome2 => "MONOCHROME2",
            PhotometricInterpretation::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

/// Interpretation of stored sample values (PixelRepresentation tag)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum PixelRepresentation {
    Unsigned,
    Signed,
}

impl PixelRepresentation {
    /// Maps the tag value: 0 is unsigned, 1 is two's-complement signed
    pub fn from_tag_value(value: u16) -> Self {
        if value == 1 {
            PixelRepresentation::Signed
        } else {
            PixelRepresentation::Unsigned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photometric_from_str() {
        assert_eq!(
            PhotometricInterpretation::from_str("MONOCHROME1"),
            PhotometricInterpretation::Monochrome1
        );
        assert_eq!(
            PhotometricInterpretation::from_str("monochrome2"),
            PhotometricInterpretation::Monochrome2
        );
        assert_eq!(
            PhotometricInterpretation::from_str(" MONOCHROME2 "),
            PhotometricInterpretation::Monochrome2
        );
        assert_eq!(
            PhotometricInterpretation::from_str("RGB"),
            PhotometricInterpretation::Unknown
        );
    }

    #[test]
    fn test_inversion_flag() {
        assert!(PhotometricInterpretation::Monochrome1.is_inverted());
        assert!(!PhotometricInterpretation::Monochrome2.is_inverted());
        assert!(!PhotometricInterpretation::Unknown.is_inverted());
    }

    #[test]
    fn test_pixel_representation_from_tag_value() {
        assert_eq!(
            PixelRepresentation::from_tag_value(0),
            PixelRepresentation::Unsigned
        );
        assert_eq!(
            PixelRepresentation::from_tag_value(1),
            PixelRepresentation::Signed
        );
        // Nonstandard values fall back to unsigned
        assert_eq!(
            PixelRepresentation::from_tag_value(7),
            PixelRepresentation::Unsigned
        );
    }
}
