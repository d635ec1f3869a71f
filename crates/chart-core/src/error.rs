// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for chart building (configuration) and image export.

use thiserror::Error;

/// All failures the crate can produce. Both variants are fatal at the
/// caller's scope; there is no retry path and no partial output.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Malformed chart specification: a requested field is missing from a
    /// record, the series count exceeds the palette, or the inputs are empty.
    #[error("invalid chart configuration: {0}")]
    Configuration(String),

    /// Filesystem or rendering-backend failure while writing the image.
    #[error("chart export failed: {0}")]
    Export(String),
}

impl ChartError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Configuration(reason.into())
    }

    pub fn export(reason: impl Into<String>) -> Self {
        Self::Export(reason.into())
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        Self::Export(err.to_string())
    }
}
