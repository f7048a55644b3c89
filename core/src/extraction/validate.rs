use crate::error::{CtViewError, Result};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

use super::tags::{
    require_u16, BITS_ALLOCATED, COLUMNS, PATIENT_ID, PIXEL_DATA, ROWS, SERIES_INSTANCE_UID,
    SOP_INSTANCE_UID, STUDY_INSTANCE_UID,
};

/// Tags every slice must carry before any downstream stage runs
const REQUIRED_TAGS: &[(Tag, &str)] = &[
    (PATIENT_ID, "PatientID"),
    (STUDY_INSTANCE_UID, "StudyInstanceUID"),
    (SERIES_INSTANCE_UID, "SeriesInstanceUID"),
    (SOP_INSTANCE_UID, "SOPInstanceUID"),
    (ROWS, "Rows"),
    (COLUMNS, "Columns"),
    (BITS_ALLOCATED, "BitsAllocated"),
    (PIXEL_DATA, "PixelData"),
];

/// Validates that a slice is complete enough to decode
///
/// Pure gate with no side effects. Downstream stages assume well-formed
/// geometry, so the checks are centralized here:
///
/// 1. Every required identifying and pixel-description tag is present.
/// 2. The pixel payload length equals rows x columns x bytes-per-sample,
///    where bytes-per-sample is ceil(BitsAllocated / 8).
///
/// # Errors
///
/// `MissingTags` listing every absent required tag, or `SizeMismatch`
/// when the payload disagrees with the declared geometry.
pub fn validate(dcm: &InMemDicomObject) -> Result<()> {
    let missing: Vec<&'static str> = REQUIRED_TAGS
        .iter()
        .filter(|(tag, _)| dcm.element(*tag).is_err())
        .map(|(_, name)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(CtViewError::MissingTags { missing });
    }

    let rows = require_u16(dcm, ROWS, "Rows")? as usize;
    let columns = require_u16(dcm, COLUMNS, "Columns")? as usize;
    let bits_allocated = require_u16(dcm, BITS_ALLOCATED, "BitsAllocated")? as usize;
    let bytes_per_sample = bits_allocated.div_ceil(8);

    let actual = super::pixels::pixel_payload(dcm)?.len();
    let expected = rows * columns * bytes_per_sample;
    if actual != expected {
        return Err(CtViewError::SizeMismatch { expected, actual });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{synthetic_ct_slice, truncate_pixel_data};

    #[test]
    fn test_validate_complete_slice() {
        let dcm = synthetic_ct_slice(16, 16);
        assert!(validate(&dcm).is_ok());
    }

    #[test]
    fn test_validate_empty_object_lists_all_tags() {
        let dcm = InMemDicomObject::new_empty();
        let err = validate(&dcm).unwrap_err();
        match err {
            CtViewError::MissingTags { missing } => {
                assert_eq!(missing.len(), REQUIRED_TAGS.len());
                assert!(missing.contains(&"PatientID"));
                assert!(missing.contains(&"PixelData"));
            }
            other => panic!("expected MissingTags, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_only_absent_tags() {
        let mut dcm = synthetic_ct_slice(8, 8);
        dcm.remove_element(SERIES_INSTANCE_UID);
        let err = validate(&dcm).unwrap_err();
        assert!(matches!(
            err,
            CtViewError::MissingTags { ref missing } if missing == &vec!["SeriesInstanceUID"]
        ));
    }

    #[test]
    fn test_validate_short_payload() {
        let mut dcm = synthetic_ct_slice(16, 16);
        truncate_pixel_data(&mut dcm, 100);
        let err = validate(&dcm).unwrap_err();
        assert!(matches!(
            err,
            CtViewError::SizeMismatch {
                expected: 512, // 16 x 16 x 2 bytes
                actual: 100,
            }
        ));
    }

    #[test]
    fn test_validate_has_no_side_effects() {
        let dcm = synthetic_ct_slice(8, 8);
        validate(&dcm).unwrap();
        // Second call sees the same object and succeeds again
        validate(&dcm).unwrap();
    }
}
