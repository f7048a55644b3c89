//! Shared fixtures for unit tests: synthetic in-memory CT slices

use crate::extraction::tags::{
    BITS_ALLOCATED, COLUMNS, INSTANCE_NUMBER, MODALITY, PATIENT_ID, PATIENT_NAME,
    PHOTOMETRIC_INTERPRETATION, PIXEL_DATA, PIXEL_REPRESENTATION, PIXEL_SPACING, ROWS,
    SERIES_INSTANCE_UID, SOP_INSTANCE_UID, STUDY_DATE, STUDY_INSTANCE_UID,
};
use dicom_core::{DataElement, PrimitiveValue, Tag, VR};
use dicom_object::InMemDicomObject;

/// Puts a decimal-string element
pub(crate) fn put_ds(dcm: &mut InMemDicomObject, tag: Tag, value: &str) {
    dcm.put(DataElement::new(tag, VR::DS, PrimitiveValue::from(value)));
}

fn put_str(dcm: &mut InMemDicomObject, tag: Tag, vr: VR, value: &str) {
    dcm.put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
}

fn put_us(dcm: &mut InMemDicomObject, tag: Tag, value: u16) {
    dcm.put(DataElement::new(tag, VR::US, PrimitiveValue::from(value)));
}

/// Builds a complete synthetic CT slice
///
/// 16-bit unsigned little-endian samples in scanline order where the raw
/// value equals the linear pixel index, calibrated with the usual CT
/// slope 1 / intercept -1024. Identifiers mirror the shape of real UIDs
/// but are fixed so tests can assert on them.
pub(crate) fn synthetic_ct_slice(rows: u16, columns: u16) -> InMemDicomObject {
    let mut dcm = InMemDicomObject::new_empty();

    put_str(&mut dcm, PATIENT_ID, VR::LO, "PAT001");
    put_str(&mut dcm, PATIENT_NAME, VR::PN, "Test^Patient");
    put_str(&mut dcm, STUDY_INSTANCE_UID, VR::UI, "1.2.840.99.1.1");
    put_str(&mut dcm, STUDY_DATE, VR::DA, "20240115");
    put_str(&mut dcm, SERIES_INSTANCE_UID, VR::UI, "1.2.840.99.1.1.1");
    put_str(&mut dcm, SOP_INSTANCE_UID, VR::UI, "1.2.840.99.1.1.1.1");
    put_str(&mut dcm, MODALITY, VR::CS, "CT");
    dcm.put(DataElement::new(
        INSTANCE_NUMBER,
        VR::IS,
        PrimitiveValue::from("1"),
    ));

    put_us(&mut dcm, ROWS, rows);
    put_us(&mut dcm, COLUMNS, columns);
    put_us(&mut dcm, BITS_ALLOCATED, 16);
    put_us(&mut dcm, PIXEL_REPRESENTATION, 0);
    put_str(&mut dcm, PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2");
    put_str(&mut dcm, PIXEL_SPACING, VR::DS, "0.7031\\0.7031");
    put_ds(&mut dcm, crate::extraction::tags::RESCALE_SLOPE, "1");
    put_ds(&mut dcm, crate::extraction::tags::RESCALE_INTERCEPT, "-1024");

    let mut payload = Vec::with_capacity(rows as usize * columns as usize * 2);
    for index in 0..(rows as usize * columns as usize) {
        payload.extend_from_slice(&(index as u16).to_le_bytes());
    }
    dcm.put(DataElement::new(
        PIXEL_DATA,
        VR::OW,
        PrimitiveValue::from(payload),
    ));

    dcm
}

/// Builds a minimal 8-bit slice without rescale or window tags
pub(crate) fn synthetic_slice_8bit(rows: u16, columns: u16, samples: &[u8]) -> InMemDicomObject {
    assert_eq!(samples.len(), rows as usize * columns as usize);

    let mut dcm = InMemDicomObject::new_empty();
    put_str(&mut dcm, PATIENT_ID, VR::LO, "PAT002");
    put_str(&mut dcm, STUDY_INSTANCE_UID, VR::UI, "1.2.840.99.2.1");
    put_str(&mut dcm, SERIES_INSTANCE_UID, VR::UI, "1.2.840.99.2.1.1");
    put_str(&mut dcm, SOP_INSTANCE_UID, VR::UI, "1.2.840.99.2.1.1.1");
    put_us(&mut dcm, ROWS, rows);
    put_us(&mut dcm, COLUMNS, columns);
    put_us(&mut dcm, BITS_ALLOCATED, 8);
    dcm.put(DataElement::new(
        PIXEL_DATA,
        VR::OW,
        PrimitiveValue::from(samples.to_vec()),
    ));
    dcm
}

/// Replaces the pixel payload with `len` zero bytes
pub(crate) fn truncate_pixel_data(dcm: &mut InMemDicomObject, len: usize) {
    dcm.put(DataElement::new(
        PIXEL_DATA,
        VR::OW,
        PrimitiveValue::from(vec![0u8; len]),
    ));
}
