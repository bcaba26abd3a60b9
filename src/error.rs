//! Error types for the badge press library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the badge press library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Attendee roster parsing error
    #[error("Roster error: {0}")]
    Roster(#[from] csv::Error),

    /// Raster image decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// SVG parsing error
    #[error("SVG error: {0}")]
    Svg(#[from] usvg::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Logo folder contains no usable assets
    #[error("No logo files found in: {}", .0.display())]
    EmptyLogoFolder(PathBuf),

    /// Logo file extension is not in the allow-list
    #[error("Unsupported logo format: {}", .0.display())]
    UnsupportedLogoFormat(PathBuf),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// General error
    #[error("{0}")]
    General(String),
}
