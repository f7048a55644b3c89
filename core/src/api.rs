use crate::error::Result;
use crate::extraction::tags::{
    get_string_value, optional_i32, optional_u16, require_u16, BITS_ALLOCATED, COLUMNS,
    INSTANCE_NUMBER, MODALITY, PATIENT_ID, PATIENT_NAME, PHOTOMETRIC_INTERPRETATION,
    PIXEL_REPRESENTATION, PIXEL_SPACING, ROWS, SERIES_DESCRIPTION, SERIES_INSTANCE_UID,
    SERIES_NUMBER, SOP_INSTANCE_UID, STUDY_DATE, STUDY_DESCRIPTION, STUDY_INSTANCE_UID,
    STUDY_TIME,
};
use crate::extraction::{decode_densities, extract_embedded_window, extract_rescale, validate};
use crate::render::apply_window;
use crate::types::{
    lookup_preset, PhotometricInterpretation, PixelRepresentation, PixelSpacing, Raster,
    WindowSelection, WindowSpec,
};
use dicom_object::InMemDicomObject;

/// Metadata extracted from one cross-sectional slice
///
/// Immutable value produced per call; the source object is not retained.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct InstanceMetadata {
    /// Patient identifier
    pub patient_id: String,

    /// Patient name, when present
    pub patient_name: Option<String>,

    /// Study Instance UID
    pub study_uid: String,

    /// Study date (YYYYMMDD), when present
    pub study_date: Option<String>,

    /// Study time (HHMMSS), when present
    pub study_time: Option<String>,

    /// Study description, when present
    pub study_description: Option<String>,

    /// Imaging modality (CT, MR, ...), when present
    pub modality: Option<String>,

    /// Series Instance UID
    pub series_uid: String,

    /// Series number, when present
    pub series_number: Option<i32>,

    /// Series description, when present
    pub series_description: Option<String>,

    /// SOP Instance UID
    pub sop_uid: String,

    /// Instance number, when present
    pub instance_number: Option<i32>,

    /// Image height in pixels
    pub rows: u16,

    /// Image width in pixels
    pub columns: u16,

    /// Bits allocated per stored sample
    pub bits_allocated: u16,

    /// Signedness of stored samples
    pub pixel_representation: PixelRepresentation,

    /// Display polarity
    pub photometric_interpretation: PhotometricInterpretation,

    /// Physical pixel spacing, when present
    pub pixel_spacing: Option<PixelSpacing>,

    /// Linear calibration slope (1.0 when the tag is absent)
    pub rescale_slope: f64,

    /// Linear calibration intercept (0.0 when the tag is absent)
    pub rescale_intercept: f64,

    /// Image-embedded default window, when the slice supplies one
    pub default_window: Option<WindowSpec>,
}

impl InstanceMetadata {
    /// Bytes per stored sample, as used by the payload size check
    pub fn bytes_per_sample(&self) -> usize {
        (self.bits_allocated as usize).div_ceil(8)
    }
}

/// Extracts per-slice metadata
///
/// Required identifying tags must be present (run [`validate`] first to get
/// a single aggregated report). Optional tags fall back to documented
/// defaults when absent; present but non-numeric values fail.
///
/// # Errors
///
/// `MissingTags` for absent required tags, `MalformedTag` for syntactically
/// malformed numeric values.
///
/// # Example
///
/// ```
/// use ctview_core::api::extract_metadata;
/// use ctview_core::extraction::tags::*;
/// use dicom_core::{DataElement, PrimitiveValue, VR};
/// use dicom_object::InMemDicomObject;
///
/// let mut dcm = InMemDicomObject::new_empty();
/// dcm.put(DataElement::new(PATIENT_ID, VR::LO, PrimitiveValue::from("PAT001")));
/// dcm.put(DataElement::new(STUDY_INSTANCE_UID, VR::UI, PrimitiveValue::from("1.2.3")));
/// dcm.put(DataElement::new(SERIES_INSTANCE_UID, VR::UI, PrimitiveValue::from("1.2.3.4")));
/// dcm.put(DataElement::new(SOP_INSTANCE_UID, VR::UI, PrimitiveValue::from("1.2.3.4.5")));
/// dcm.put(DataElement::new(ROWS, VR::US, PrimitiveValue::from(2u16)));
/// dcm.put(DataElement::new(COLUMNS, VR::US, PrimitiveValue::from(2u16)));
/// dcm.put(DataElement::new(BITS_ALLOCATED, VR::US, PrimitiveValue::from(8u16)));
/// dcm.put(DataElement::new(PIXEL_DATA, VR::OW, PrimitiveValue::from(vec![0u8; 4])));
///
/// let meta = extract_metadata(&dcm).unwrap();
/// assert_eq!(meta.patient_id, "PAT001");
/// assert_eq!(meta.rescale_slope, 1.0);
/// assert_eq!(meta.default_window, None);
/// ```
pub fn extract_metadata(dcm: &InMemDicomObject) -> Result<InstanceMetadata> {
    let (rescale_slope, rescale_intercept) = extract_rescale(dcm)?;

    let pixel_spacing = match get_string_value(dcm, PIXEL_SPACING) {
        Some(raw) => Some(PixelSpacing::parse(&raw)?),
        None => None,
    };

    Ok(InstanceMetadata {
        patient_id: require_string(dcm, PATIENT_ID, "PatientID")?,
        patient_name: get_string_value(dcm, PATIENT_NAME),
        study_uid: require_string(dcm, STUDY_INSTANCE_UID, "StudyInstanceUID")?,
        study_date: get_string_value(dcm, STUDY_DATE),
        study_time: get_string_value(dcm, STUDY_TIME),
        study_description: get_string_value(dcm, STUDY_DESCRIPTION),
        modality: get_string_value(dcm, MODALITY),
        series_uid: require_string(dcm, SERIES_INSTANCE_UID, "SeriesInstanceUID")?,
        series_number: optional_i32(dcm, SERIES_NUMBER, "SeriesNumber")?,
        series_description: get_string_value(dcm, SERIES_DESCRIPTION),
        sop_uid: require_string(dcm, SOP_INSTANCE_UID, "SOPInstanceUID")?,
        instance_number: optional_i32(dcm, INSTANCE_NUMBER, "InstanceNumber")?,
        rows: require_u16(dcm, ROWS, "Rows")?,
        columns: require_u16(dcm, COLUMNS, "Columns")?,
        bits_allocated: require_u16(dcm, BITS_ALLOCATED, "BitsAllocated")?,
        pixel_representation: PixelRepresentation::from_tag_value(
            optional_u16(dcm, PIXEL_REPRESENTATION, "PixelRepresentation")?.unwrap_or(0),
        ),
        photometric_interpretation: get_string_value(dcm, PHOTOMETRIC_INTERPRETATION)
            .map(|s| PhotometricInterpretation::from_str(&s))
            .unwrap_or(PhotometricInterpretation::Monochrome2),
        pixel_spacing,
        rescale_slope,
        rescale_intercept,
        default_window: extract_embedded_window(dcm)?,
    })
}

fn require_string(
    dcm: &InMemDicomObject,
    tag: dicom_core::Tag,
    name: &'static str,
) -> Result<String> {
    get_string_value(dcm, tag).ok_or(crate::error::CtViewError::MissingTags {
        missing: vec![name],
    })
}

/// Renders a slice into an 8-bit grayscale raster
///
/// Runs the full pipeline: validate, extract metadata, decode and calibrate
/// the density grid, then clip/normalize against the selected window.
/// Idempotent and free of side effects; the same slice and selection always
/// produce a bit-identical raster.
///
/// Preset resolution: the name `"default"` means the image's own embedded
/// window/level when the slice supplies one, with the table row (400/40) as
/// the fallback. Every other preset name always means the table row,
/// regardless of what the image embeds.
///
/// # Errors
///
/// Any validation, metadata, preset-lookup, or window failure from the
/// underlying stages; failures are all-or-nothing, never a partial raster.
pub fn render(dcm: &InMemDicomObject, selection: &WindowSelection) -> Result<Raster> {
    validate(dcm)?;
    let metadata = extract_metadata(dcm)?;
    let densities = decode_densities(dcm)?;
    let window = resolve_window(&metadata, selection)?;
    apply_window(
        &densities,
        window,
        metadata.photometric_interpretation.is_inverted(),
    )
}

/// Opens a DICOM file and renders it in one call
///
/// Convenience wrapper for callers that work from paths; the engine itself
/// performs no I/O beyond this read.
///
/// # Errors
///
/// `DicomRead` when the file cannot be parsed, plus any failure from
/// [`render`].
pub fn render_file<P: AsRef<std::path::Path>>(
    path: P,
    selection: &WindowSelection,
) -> Result<Raster> {
    let obj = dicom_object::open_file(path.as_ref())?;
    render(&obj, selection)
}

/// Resolves a window selection against the preset table and the slice
fn resolve_window(metadata: &InstanceMetadata, selection: &WindowSelection) -> Result<WindowSpec> {
    match selection {
        WindowSelection::Explicit(spec) => Ok(*spec),
        WindowSelection::Preset(name) if name == "default" => {
            // The embedded default wins over the table row; an embedded
            // width <= 0 is surfaced later as an invalid window rather
            // than silently replaced.
            match metadata.default_window {
                Some(embedded) => Ok(embedded),
                None => lookup_preset("default"),
            }
        }
        WindowSelection::Preset(name) => lookup_preset(name),
    }
}
