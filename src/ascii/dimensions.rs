//! Grid size resolution for aspect-ratio-correct ASCII rendering.
//!
//! Terminal cells are roughly twice as tall as they are wide. A height
//! derived from a width is therefore multiplied by the aspect correction
//! factor (0.5 by default), and a width derived from a height is divided
//! by it. Every derived size goes through the same two helpers so the
//! correction is applied consistently.

use serde::{Deserialize, Serialize};

use super::error::ConvertError;
use super::sizing::{nonzero, CellUnit, SizingRequest};
use super::source::{Filter, Rgba16Buffer, SourceImage};
use crate::terminal::SurfaceGeometry;

/// Default vertical correction for width-derived heights.
pub const DEFAULT_ASPECT_CORRECTION: f64 = 0.5;

/// Ratio of cell width to cell height.
///
/// Must be finite and in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AspectCorrection(f64);

impl AspectCorrection {
    pub fn new(factor: f64) -> Result<Self, ConvertError> {
        if factor.is_finite() && factor > 0.0 && factor <= 1.0 {
            Ok(Self(factor))
        } else {
            Err(ConvertError::InvalidRequest(format!(
                "aspect correction must be in (0, 1], got {}",
                factor
            )))
        }
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    /// Rows for a natural (square-pixel) height. Truncates, in every mode
    /// including `Fill`, so 39 natural rows become 19 at the default factor.
    pub fn rows_for(&self, natural_height: u32) -> u32 {
        (natural_height as f64 * self.0) as u32
    }

    /// Columns for a natural (square-pixel) width. Truncates.
    pub fn columns_for(&self, natural_width: u32) -> u32 {
        (natural_width as f64 / self.0) as u32
    }
}

impl Default for AspectCorrection {
    fn default() -> Self {
        Self(DEFAULT_ASPECT_CORRECTION)
    }
}

impl TryFrom<f64> for AspectCorrection {
    type Error = ConvertError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        AspectCorrection::new(factor)
    }
}

impl From<AspectCorrection> for f64 {
    fn from(correction: AspectCorrection) -> Self {
        correction.0
    }
}

/// Knobs that shape resolution and resampling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolveOptions {
    pub cell_unit: CellUnit,
    pub aspect: AspectCorrection,
    pub filter: Filter,
}

/// Final resample size in pixels (cell grid size times the cell unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

/// Resolved size together with the image resampled to it.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub width: u32,
    pub height: u32,
    pub image: Rgba16Buffer,
}

/// Height of an aspect-preserving resize of `source` to `width`.
///
/// Rounds half up and never returns less than 1.
pub fn natural_height(source: (u32, u32), width: u32) -> u32 {
    let (src_w, src_h) = source;
    let exact = width as f64 * src_h as f64 / src_w as f64;
    (exact + 0.5).floor().max(1.0) as u32
}

/// Width of an aspect-preserving resize of `source` to `height`.
pub fn natural_width(source: (u32, u32), height: u32) -> u32 {
    let (src_w, src_h) = source;
    let exact = height as f64 * src_w as f64 / src_h as f64;
    (exact + 0.5).floor().max(1.0) as u32
}

/// Compute the resample size for an image of `source` pixels.
///
/// Surface-width checks use the cell grid width; the cell unit scaling is
/// applied afterwards.
pub fn resolve_dimensions(
    source: (u32, u32),
    surface: SurfaceGeometry,
    request: SizingRequest,
    options: &ResolveOptions,
) -> Result<GridSize, ConvertError> {
    if source.0 == 0 || source.1 == 0 {
        return Err(ConvertError::InvalidRequest(format!(
            "source image has no pixels ({}x{})",
            source.0, source.1
        )));
    }

    let usable = surface.usable_width();
    let aspect = options.aspect;

    let (width, height) = match request {
        SizingRequest::Fill => {
            let width = require_columns(surface)?;
            let height = aspect.rows_for(natural_height(source, width)).max(1);
            (width, height)
        }
        SizingRequest::ByWidth(width) => {
            let width = nonzero("width", width)?;
            if width > usable {
                return Err(ConvertError::too_wide("requested width", width, usable));
            }
            let height = aspect.rows_for(natural_height(source, width)).max(1);
            (width, height)
        }
        SizingRequest::ByHeight(height) => {
            let height = nonzero("height", height)?;
            let width = aspect.columns_for(natural_width(source, height));
            if width > usable {
                return Err(ConvertError::too_wide(
                    "width calculated from height",
                    width,
                    usable,
                ));
            }
            (width, height)
        }
        SizingRequest::Auto => {
            let height = surface.usable_height().max(1);
            let width = aspect.columns_for(natural_width(source, height));
            if width >= surface.width {
                log::debug!(
                    "auto: width {} from height {} overflows surface, fitting width instead",
                    width,
                    height
                );
                let width = require_columns(surface)?;
                let height = aspect.rows_for(natural_height(source, width)).max(1);
                (width, height)
            } else {
                (width, height)
            }
        }
        SizingRequest::Explicit { width, height } => {
            let width = nonzero("dimensions width", width)?;
            let height = nonzero("dimensions height", height)?;
            if width > usable {
                return Err(ConvertError::too_wide("requested width", width, usable));
            }
            (width, height)
        }
    };

    if options.cell_unit.is_dense() {
        log::debug!(
            "scaling {}x{} cells by {}x{} cell unit",
            width,
            height,
            options.cell_unit.horizontal,
            options.cell_unit.vertical
        );
    }
    let (width, height) = options.cell_unit.scale(width, height)?;
    log::debug!(
        "{} sizing: {}x{} image -> {}x{} on {}x{} surface",
        request.name(),
        source.0,
        source.1,
        width,
        height,
        surface.width,
        surface.height
    );

    Ok(GridSize { width, height })
}

fn require_columns(surface: SurfaceGeometry) -> Result<u32, ConvertError> {
    match surface.usable_width() {
        0 => Err(ConvertError::too_wide("terminal width", surface.width, 0)),
        usable => Ok(usable),
    }
}

/// Resolve the grid size for `image` and resample it to that size.
pub fn resolve<I: SourceImage + ?Sized>(
    image: &I,
    surface: SurfaceGeometry,
    request: SizingRequest,
    options: &ResolveOptions,
) -> Result<Resolved, ConvertError> {
    let size = resolve_dimensions(image.source_size(), surface, request, options)?;
    log::debug!(
        "resampling to {}x{} with {}",
        size.width,
        size.height,
        options.filter.name()
    );
    let resized = image.resample(size.width, size.height, options.filter);

    Ok(Resolved {
        width: size.width,
        height: size.height,
        image: resized,
    })
}
