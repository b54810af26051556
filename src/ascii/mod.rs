//! Image to ASCII pixel grid conversion.
//!
//! The conversion runs in two steps:
//!
//! 1. **Dimension resolution** - pick the grid size from a [`SizingRequest`]
//!    and the surface geometry, correcting for non-square cells, then
//!    resample the image to that size
//! 2. **Sampling** - turn every resampled pixel into an [`AsciiPixel`]
//!    and optionally mirror the grid
//!
//! Glyph selection and terminal output are left to the renderer that
//! consumes the [`PixelGrid`].

mod convert;
mod dimensions;
mod error;
mod sampler;
mod sizing;
mod source;

pub use convert::{convert_to_ascii_pixels, ConvertOptions};
pub use dimensions::{
    natural_height, natural_width, resolve, resolve_dimensions, AspectCorrection, GridSize,
    ResolveOptions, Resolved, DEFAULT_ASPECT_CORRECTION,
};
pub use error::ConvertError;
pub use sampler::{sample, AsciiPixel, PixelGrid};
pub use sizing::{CellUnit, SizingFlags, SizingRequest};
pub use source::{Filter, Rgba16Buffer, SourceImage};
