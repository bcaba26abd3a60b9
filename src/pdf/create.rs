//! Badge batch generation
//!
//! Wires the roster, logo folder, and badge document together: one badge
//! per attendee, one independently chosen logo per badge. Every failure is
//! fatal for the whole run; no placeholder badge is substituted for an
//! asset that fails to decode.

use std::path::PathBuf;

use crate::error::Result;
use crate::logo::{scan_logo_folder, Logo, LogoPicker};
use crate::pdf::document::BadgeDocument;
use crate::roster::read_roster;

/// Options for a badge generation run
#[derive(Debug, Clone)]
pub struct BadgeOptions {
    /// CSV attendee roster (first column = name, header row skipped)
    pub roster_path: PathBuf,
    /// Folder of logo assets (not searched recursively)
    pub logos_dir: PathBuf,
    /// Output PDF file path
    pub output_path: PathBuf,
    /// Seed for reproducible logo assignment
    pub seed: Option<u64>,
}

/// Generate the badge document described by `options`
///
/// Returns the number of badges written. Logos are re-loaded for every
/// badge; picks are independent, so the same asset may repeat.
pub fn create_badges(options: &BadgeOptions) -> Result<usize> {
    let attendees = read_roster(&options.roster_path)?;
    let logos = scan_logo_folder(&options.logos_dir)?;
    let mut picker = LogoPicker::new(logos, options.seed);

    let mut document = BadgeDocument::new();
    for attendee in &attendees {
        let logo = Logo::load(picker.pick())?;
        document.add_badge(&attendee.name, &logo)?;
    }

    let count = document.badge_count();
    document.save(&options.output_path)?;
    Ok(count)
}
