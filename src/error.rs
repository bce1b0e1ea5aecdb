//! Error types for the portrait library.

use std::io;
use thiserror::Error;

/// Result type alias for portrait operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating a report.
///
/// Degenerate segmentation and unmatched sections are not errors: they are
/// recovered inside the pipeline. Only conditions that make a document
/// impossible to produce surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The report content is empty or blank after normalization.
    #[error("Report content is missing")]
    MissingContent,

    /// The subject profile failed boundary validation.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// A single drawable unit is taller than the printable page height.
    #[error("Layout overflow: unit of {height:.1}mm exceeds printable height of {available:.1}mm")]
    LayoutOverflow {
        /// Height of the offending unit in millimetres
        height: f32,
        /// Printable height of a page in millimetres
        available: f32,
    },

    /// Error while producing an output format (PDF, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Invalid configuration (page geometry, options).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
