use crate::api::InstanceMetadata;
use std::fmt;

/// Text report formatter for slice metadata
pub struct TextReport<'a> {
    metadata: &'a InstanceMetadata,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(metadata: &'a InstanceMetadata) -> Self {
        Self { metadata }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metadata;

        writeln!(f, "Slice Metadata")?;
        writeln!(f, "==============")?;
        writeln!(f)?;
        writeln!(f, "Patient ID:     {}", m.patient_id)?;
        writeln!(
            f,
            "Patient Name:   {}",
            m.patient_name.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "Study UID:      {}", m.study_uid)?;
        writeln!(
            f,
            "Study Date:     {}",
            m.study_date.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Description:    {}",
            m.study_description.as_deref().unwrap_or("unknown")
        )?;
        writeln!(
            f,
            "Modality:       {}",
            m.modality.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "Series UID:     {}", m.series_uid)?;
        writeln!(f, "SOP UID:        {}", m.sop_uid)?;
        if let Some(number) = m.instance_number {
            writeln!(f, "Instance:       {}", number)?;
        }
        writeln!(f)?;

        writeln!(f, "Pixel Description")?;
        writeln!(f, "-----------------")?;
        writeln!(f, "Dimensions:     {} x {}", m.rows, m.columns)?;
        writeln!(f, "Bits Allocated: {}", m.bits_allocated)?;
        writeln!(f, "Photometric:    {}", m.photometric_interpretation)?;
        match m.pixel_spacing {
            Some(spacing) => writeln!(f, "Pixel Spacing:  {}", spacing)?,
            None => writeln!(f, "Pixel Spacing:  unknown")?,
        }
        writeln!(
            f,
            "Calibration:    density = raw * {} + {}",
            m.rescale_slope, m.rescale_intercept
        )?;
        match m.default_window {
            Some(window) => writeln!(f, "Default Window: {}", window)?,
            None => writeln!(f, "Default Window: none embedded")?,
        }

        Ok(())
    }
}
