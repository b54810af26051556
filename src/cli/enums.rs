//! CLI enum types for output format and resampling filter options.

use clap::ValueEnum;

use crate::ascii::Filter;

/// How the sampled grid is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Grid size and mean intensity
    #[default]
    Summary,
    /// Every pixel as JSON
    Json,
    /// One line per row of space-separated intensities
    Intensity,
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterChoice {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterChoice> for Filter {
    fn from(f: FilterChoice) -> Self {
        match f {
            FilterChoice::Nearest => Filter::Nearest,
            FilterChoice::Triangle => Filter::Triangle,
            FilterChoice::CatmullRom => Filter::CatmullRom,
            FilterChoice::Gaussian => Filter::Gaussian,
            FilterChoice::Lanczos3 => Filter::Lanczos3,
        }
    }
}
