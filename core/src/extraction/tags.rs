use crate::error::{CtViewError, Result};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Patient Tags
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);

// Study Tags
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);

// Series Tags
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);

// Instance Tags
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

// Pixel Description Tags
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);

// Calibration and Display Tags
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);

// Pixel Payload Tag
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Reads an optional i32 tag
///
/// Absence yields `Ok(None)`; a present but non-numeric value is a
/// `MalformedTag` failure, same as the other optional readers.
pub fn optional_i32(dcm: &InMemDicomObject, tag: Tag, name: &'static str) -> Result<Option<i32>> {
    match dcm.element(tag) {
        Err(_) => Ok(None),
        Ok(elem) => elem
            .to_int::<i32>()
            .map(Some)
            .map_err(|_| CtViewError::MalformedTag {
                tag: name,
                raw_value: raw_value_of(dcm, tag),
            }),
    }
}

/// Reads a required u16 tag
///
/// # Errors
///
/// `MissingTags` when the tag is absent, `MalformedTag` when it is present
/// but not numeric.
pub fn require_u16(dcm: &InMemDicomObject, tag: Tag, name: &'static str) -> Result<u16> {
    match dcm.element(tag) {
        Err(_) => Err(CtViewError::MissingTags {
            missing: vec![name],
        }),
        Ok(elem) => elem.to_int::<u16>().map_err(|_| CtViewError::MalformedTag {
            tag: name,
            raw_value: raw_value_of(dcm, tag),
        }),
    }
}

/// Reads an optional f64 tag
///
/// Absence yields `Ok(None)` so the caller can apply a documented default;
/// a present but non-numeric value is a `MalformedTag` failure.
pub fn optional_f64(dcm: &InMemDicomObject, tag: Tag, name: &'static str) -> Result<Option<f64>> {
    match dcm.element(tag) {
        Err(_) => Ok(None),
        Ok(elem) => elem
            .to_float64()
            .map(Some)
            .map_err(|_| CtViewError::MalformedTag {
                tag: name,
                raw_value: raw_value_of(dcm, tag),
            }),
    }
}

/// Reads an optional u16 tag with the same malformed-value policy
pub fn optional_u16(dcm: &InMemDicomObject, tag: Tag, name: &'static str) -> Result<Option<u16>> {
    match dcm.element(tag) {
        Err(_) => Ok(None),
        Ok(elem) => elem
            .to_int::<u16>()
            .map(Some)
            .map_err(|_| CtViewError::MalformedTag {
                tag: name,
                raw_value: raw_value_of(dcm, tag),
            }),
    }
}

/// Best-effort textual rendering of a tag value for error reports
fn raw_value_of(dcm: &InMemDicomObject, tag: Tag) -> String {
    get_string_value(dcm, tag).unwrap_or_default()
}
