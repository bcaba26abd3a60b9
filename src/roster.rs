//! Attendee roster reading

use std::path::Path;

use crate::error::{Error, Result};

/// One attendee row from the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    /// Display name printed on the badge
    pub name: String,
}

/// Read the attendee roster from a CSV file
///
/// The first column of each row is the attendee name. The first row is
/// always treated as a header and skipped, whatever it contains; blank
/// rows are ignored. Rows are returned in file order.
pub fn read_roster(path: &Path) -> Result<Vec<Attendee>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut attendees = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(name) = record.get(0) {
            attendees.push(Attendee {
                name: name.to_string(),
            });
        }
    }

    Ok(attendees)
}
