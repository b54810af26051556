//! Decoded source images and the resampling primitive.

use image::buffer::ConvertBuffer;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// A 16-bit-per-channel RGBA buffer; the resampler's output format.
pub type Rgba16Buffer = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Resampling filter used for the final resize.
///
/// The filter affects quality only. Sizing never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Nearest => "nearest",
            Filter::Triangle => "triangle",
            Filter::CatmullRom => "catmull-rom",
            Filter::Gaussian => "gaussian",
            Filter::Lanczos3 => "lanczos3",
        }
    }
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// A decoded raster that can be resampled to an exact size.
///
/// Implementations must be deterministic: the same image, size and filter
/// always produce the same buffer.
pub trait SourceImage {
    /// Native (width, height) in pixels.
    fn source_size(&self) -> (u32, u32);

    /// Resample to exactly `width` x `height`, ignoring the aspect ratio.
    fn resample(&self, width: u32, height: u32, filter: Filter) -> Rgba16Buffer;
}

impl SourceImage for DynamicImage {
    fn source_size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn resample(&self, width: u32, height: u32, filter: Filter) -> Rgba16Buffer {
        imageops::resize(&self.to_rgba16(), width, height, filter.into())
    }
}

impl SourceImage for Rgba16Buffer {
    fn source_size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn resample(&self, width: u32, height: u32, filter: Filter) -> Rgba16Buffer {
        imageops::resize(self, width, height, filter.into())
    }
}

impl SourceImage for RgbaImage {
    fn source_size(&self) -> (u32, u32) {
        self.dimensions()
    }

    fn resample(&self, width: u32, height: u32, filter: Filter) -> Rgba16Buffer {
        let wide: Rgba16Buffer = self.convert();
        imageops::resize(&wide, width, height, filter.into())
    }
}
