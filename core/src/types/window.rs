use crate::error::{CtViewError, Result};
use std::fmt;

/// Window/level pair in density units
///
/// The width is the span of density values mapped onto the visible
/// grayscale range; the level is the center of that span. Constructed per
/// request from the preset table or from an image's embedded default,
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct WindowSpec {
    pub width: f64,
    pub level: f64,
}

impl WindowSpec {
    /// Creates a new WindowSpec
    pub const fn new(width: f64, level: f64) -> Self {
        Self { width, level }
    }

    /// Lower and upper clipping bounds in density units
    pub fn bounds(&self) -> (f64, f64) {
        (self.level - self.width / 2.0, self.level + self.width / 2.0)
    }

    /// Whether this window can be rendered (finite, positive width)
    pub fn is_displayable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.level.is_finite()
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{} L{}", self.width, self.level)
    }
}

/// How the caller selects the window for a render call
#[derive(Debug, Clone, PartialEq)]
pub enum WindowSelection {
    /// Named entry from the preset table
    Preset(String),
    /// Caller-supplied window/level, bypassing the table
    Explicit(WindowSpec),
}

impl WindowSelection {
    /// Convenience constructor for a named preset
    pub fn preset(name: &str) -> Self {
        WindowSelection::Preset(name.to_string())
    }
}

/// Fixed table of clinical window/level presets
///
/// Read-only for the lifetime of the process; concurrent lookups need no
/// synchronization.
pub const WINDOW_PRESETS: &[(&str, WindowSpec)] = &[
    ("default", WindowSpec::new(400.0, 40.0)), // soft tissue
    ("lung", WindowSpec::new(1500.0, -600.0)),
    ("bone", WindowSpec::new(2000.0, 300.0)),
    ("brain", WindowSpec::new(80.0, 40.0)),
    ("liver", WindowSpec::new(150.0, 30.0)),
];

/// Looks up a preset by exact, case-sensitive name
///
/// # Errors
///
/// Returns `CtViewError::UnknownPreset` for any name outside the table.
pub fn lookup_preset(name: &str) -> Result<WindowSpec> {
    WINDOW_PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|(_, spec)| *spec)
        .ok_or_else(|| CtViewError::UnknownPreset {
            name: name.to_string(),
        })
}

/// Returns the names of all presets, in table order
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    WINDOW_PRESETS.iter().map(|(name, _)| *name)
}
