//! Error types for rooflini

use thiserror::Error;

/// Errors that abort a render pass
#[derive(Error, Debug)]
pub enum RooflineError {
    /// A datapoint referenced a benchmark missing from the intensity table
    #[error("Unknown benchmark: {0}")]
    UnknownBenchmark(String),

    /// Axis bounds are non-positive or not increasing
    #[error("Degenerate {axis} axis bounds: [{min}, {max}]")]
    DegenerateAxis {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    /// No roofs or no slopes were configured
    #[error("No {0} configured")]
    MissingCeilings(&'static str),

    /// Output extension has no drawing backend
    #[error("Unsupported output format: {0:?} (expected svg, png, bmp, jpg)")]
    UnsupportedFormat(String),

    /// A ceiling, benchmark or datapoint value is not positive
    #[error("{kind} {name:?} must be positive, got {value}")]
    NonPositiveValue {
        kind: &'static str,
        name: String,
        value: f64,
    },

    /// Drawing backend failure, including an unwritable output file
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for rooflini operations
pub type Result<T> = std::result::Result<T, RooflineError>;
