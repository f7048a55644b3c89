use crate::error::Result;
use crate::types::WindowSpec;
use dicom_object::InMemDicomObject;

use super::tags::{optional_f64, RESCALE_INTERCEPT, RESCALE_SLOPE, WINDOW_CENTER, WINDOW_WIDTH};

/// Default rescale slope when the tag is absent
pub const DEFAULT_RESCALE_SLOPE: f64 = 1.0;

/// Default rescale intercept when the tag is absent
pub const DEFAULT_RESCALE_INTERCEPT: f64 = 0.0;

/// Reads the linear calibration (slope, intercept)
///
/// The defaults of slope 1.0 and intercept 0.0 are the DICOM-mandated
/// interpretation of an absent tag; they are applied explicitly here and
/// never inferred from sample statistics.
///
/// # Errors
///
/// `MalformedTag` when either tag is present but not numeric.
pub fn extract_rescale(dcm: &InMemDicomObject) -> Result<(f64, f64)> {
    let slope =
        optional_f64(dcm, RESCALE_SLOPE, "RescaleSlope")?.unwrap_or(DEFAULT_RESCALE_SLOPE);
    let intercept = optional_f64(dcm, RESCALE_INTERCEPT, "RescaleIntercept")?
        .unwrap_or(DEFAULT_RESCALE_INTERCEPT);
    Ok((slope, intercept))
}

/// Reads the image-embedded default window, if any
///
/// Both WindowCenter and WindowWidth must be present for the slice to count
/// as supplying a default; a lone tag is ignored. The returned spec is not
/// checked for displayability here: a zero or negative embedded width is
/// surfaced by the renderer as an invalid-window failure.
///
/// # Errors
///
/// `MalformedTag` when a present tag is not numeric.
pub fn extract_embedded_window(dcm: &InMemDicomObject) -> Result<Option<WindowSpec>> {
    let center = optional_f64(dcm, WINDOW_CENTER, "WindowCenter")?;
    let width = optional_f64(dcm, WINDOW_WIDTH, "WindowWidth")?;
    match (width, center) {
        (Some(width), Some(level)) => Ok(Some(WindowSpec::new(width, level))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CtViewError;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    fn put_ds(dcm: &mut InMemDicomObject, tag: dicom_core::Tag, value: &str) {
        dcm.put(DataElement::new(tag, VR::DS, PrimitiveValue::from(value)));
    }

    #[test]
    fn test_rescale_defaults_when_absent() {
        let dcm = InMemDicomObject::new_empty();
        assert_eq!(extract_rescale(&dcm).unwrap(), (1.0, 0.0));
    }

    #[test]
    fn test_rescale_ct_calibration() {
        let mut dcm = InMemDicomObject::new_empty();
        put_ds(&mut dcm, RESCALE_SLOPE, "1");
        put_ds(&mut dcm, RESCALE_INTERCEPT, "-1024");
        assert_eq!(extract_rescale(&dcm).unwrap(), (1.0, -1024.0));
    }

    #[test]
    fn test_rescale_malformed_slope() {
        let mut dcm = InMemDicomObject::new_empty();
        put_ds(&mut dcm, RESCALE_SLOPE, "one point five");
        let err = extract_rescale(&dcm).unwrap_err();
        assert!(matches!(
            err,
            CtViewError::MalformedTag { tag: "RescaleSlope", .. }
        ));
    }

    #[test]
    fn test_embedded_window_absent() {
        let dcm = InMemDicomObject::new_empty();
        assert_eq!(extract_embedded_window(&dcm).unwrap(), None);
    }

    #[test]
    fn test_embedded_window_present() {
        let mut dcm = InMemDicomObject::new_empty();
        put_ds(&mut dcm, WINDOW_CENTER, "50");
        put_ds(&mut dcm, WINDOW_WIDTH, "350");
        assert_eq!(
            extract_embedded_window(&dcm).unwrap(),
            Some(WindowSpec::new(350.0, 50.0))
        );
    }

    #[test]
    fn test_embedded_window_requires_both_tags() {
        let mut dcm = InMemDicomObject::new_empty();
        put_ds(&mut dcm, WINDOW_CENTER, "50");
        assert_eq!(extract_embedded_window(&dcm).unwrap(), None);
    }

    #[test]
    fn test_embedded_window_zero_width_passes_through() {
        // Displayability is the renderer's call, not extraction's
        let mut dcm = InMemDicomObject::new_empty();
        put_ds(&mut dcm, WINDOW_CENTER, "40");
        put_ds(&mut dcm, WINDOW_WIDTH, "0");
        assert_eq!(
            extract_embedded_window(&dcm).unwrap(),
            Some(WindowSpec::new(0.0, 40.0))
        );
    }
}
