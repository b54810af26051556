//! Error types for ASCII pixel conversion.

/// Errors that can occur while sizing or converting an image.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The rendering surface could not be queried (e.g. stdout is not a terminal)
    #[error("Could not determine terminal size: {0}")]
    GeometryUnavailable(#[source] std::io::Error),

    /// A requested or derived grid dimension does not fit the surface
    #[error("{dimension} {value} exceeds usable terminal width {limit}")]
    ConstraintViolation {
        /// Which value broke the bound, e.g. "requested width"
        dimension: &'static str,
        /// The offending value
        value: u32,
        /// Usable surface width (terminal width - 1)
        limit: u32,
    },

    /// The sizing inputs contradict each other or are out of range
    #[error("Invalid sizing request: {0}")]
    InvalidRequest(String),
}

impl ConvertError {
    pub(crate) fn too_wide(dimension: &'static str, value: u32, limit: u32) -> Self {
        ConvertError::ConstraintViolation {
            dimension,
            value,
            limit,
        }
    }
}
