//! PDF output module

pub mod badge;
pub mod create;
pub mod document;
pub mod merge;
pub mod metadata;

// Re-export commonly used items
pub use create::{create_badges, BadgeOptions};
pub use document::BadgeDocument;
pub use merge::{combine_directory, merge_pdfs, MergeOptions, DEFAULT_COMBINED_NAME};
pub use metadata::count_pages;
