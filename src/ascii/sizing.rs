//! Sizing requests and rendering-unit geometry.

use super::error::ConvertError;

/// How the output grid size is chosen. Exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizingRequest {
    /// Width and height given directly; no aspect correction.
    Explicit { width: u32, height: u32 },
    /// Fixed width, height derived from the image aspect ratio.
    ByWidth(u32),
    /// Fixed height, width derived from the image aspect ratio.
    ByHeight(u32),
    /// Use the full usable surface width.
    Fill,
    /// Fit the surface height, falling back to its width when too wide.
    #[default]
    Auto,
}

impl SizingRequest {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            SizingRequest::Explicit { .. } => "explicit",
            SizingRequest::ByWidth(_) => "width",
            SizingRequest::ByHeight(_) => "height",
            SizingRequest::Fill => "fill",
            SizingRequest::Auto => "auto",
        }
    }
}

/// Flag-style sizing inputs, as collected from a command line.
///
/// Converted into a [`SizingRequest`] with `TryFrom`. Precedence:
/// `full`, then `width`/`height` (only without `dimensions`), then `Auto`
/// when nothing is given, then `dimensions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizingFlags {
    pub dimensions: Option<[u32; 2]>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub full: bool,
}

impl TryFrom<SizingFlags> for SizingRequest {
    type Error = ConvertError;

    fn try_from(flags: SizingFlags) -> Result<Self, Self::Error> {
        if flags.full {
            return Ok(SizingRequest::Fill);
        }

        match (flags.dimensions, flags.width, flags.height) {
            (None, Some(_), Some(_)) => Err(ConvertError::InvalidRequest(
                "both width and height can't be set, use dimensions instead".to_string(),
            )),
            (None, Some(width), None) => Ok(SizingRequest::ByWidth(nonzero("width", width)?)),
            (None, None, Some(height)) => Ok(SizingRequest::ByHeight(nonzero("height", height)?)),
            (None, None, None) => Ok(SizingRequest::Auto),
            (Some([width, height]), _, _) => Ok(SizingRequest::Explicit {
                width: nonzero("dimensions width", width)?,
                height: nonzero("dimensions height", height)?,
            }),
        }
    }
}

pub(crate) fn nonzero(what: &str, value: u32) -> Result<u32, ConvertError> {
    if value == 0 {
        Err(ConvertError::InvalidRequest(format!("{} must be greater than 0", what)))
    } else {
        Ok(value)
    }
}

/// Number of resampled pixels that make up one rendered cell.
///
/// Plain text uses one pixel per cell. Braille patterns pack a 2x4 dot
/// matrix into each cell, so the image is resampled at 2x4 the grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUnit {
    pub horizontal: u32,
    pub vertical: u32,
}

impl CellUnit {
    pub const TEXT: CellUnit = CellUnit {
        horizontal: 1,
        vertical: 1,
    };

    pub const BRAILLE: CellUnit = CellUnit {
        horizontal: 2,
        vertical: 4,
    };

    /// Scale a cell grid size to the pixel size to resample at.
    ///
    /// Fails when the scaled size no longer fits in a `u32`.
    pub fn scale(&self, width: u32, height: u32) -> Result<(u32, u32), ConvertError> {
        let scaled_width = width.checked_mul(self.horizontal).ok_or_else(|| {
            ConvertError::InvalidRequest(format!(
                "width {} is too large for a {}x{} cell unit",
                width, self.horizontal, self.vertical
            ))
        })?;
        let scaled_height = height.checked_mul(self.vertical).ok_or_else(|| {
            ConvertError::InvalidRequest(format!(
                "height {} is too large for a {}x{} cell unit",
                height, self.horizontal, self.vertical
            ))
        })?;
        Ok((scaled_width, scaled_height))
    }

    pub fn is_dense(&self) -> bool {
        self.horizontal > 1 || self.vertical > 1
    }
}

impl Default for CellUnit {
    fn default() -> Self {
        CellUnit::TEXT
    }
}
