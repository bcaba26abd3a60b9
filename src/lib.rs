//! Badge Press Library
//!
//! Generates printable attendee badges from a CSV name list and a folder
//! of sponsor logos, two badges per US Letter page with cut guides, and
//! combines directories of PDF files into one document. This library
//! provides functionality to:
//! - Read an attendee roster (header row skipped)
//! - Normalize vector and raster logos (greyscale, background-aware
//!   inversion, aspect-preserving fit)
//! - Auto-shrink attendee names to the badge width
//! - Assemble and save the badge PDF
//! - Combine a directory of PDFs in filename order
//!
//! # Example
//!
//! ```no_run
//! use badge_press::pdf::{create_badges, BadgeOptions};
//! use std::path::PathBuf;
//!
//! let options = BadgeOptions {
//!     roster_path: PathBuf::from("names.csv"),
//!     logos_dir: PathBuf::from("logos"),
//!     output_path: PathBuf::from("badges.pdf"),
//!     seed: None,
//! };
//!
//! create_badges(&options).expect("Failed to generate badges");
//! ```

pub mod error;
pub mod layout;
pub mod logo;
pub mod pdf;
pub mod roster;
pub mod text;

// Re-export commonly used items
pub use error::{Error, Result};
