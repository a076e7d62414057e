use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ScheduledEntry;
use crate::core::primitives::{format_iso_date, parse_iso_date_lenient};

/// The existing entry a proposed range collides with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictInfo {
    pub entry_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ConflictInfo {
    #[must_use]
    pub fn from_entry(entry: &ScheduledEntry) -> Self {
        Self {
            entry_id: entry.id.clone(),
            name: entry.name.clone(),
            start_date: entry.start_date,
            end_date: entry.end_date,
        }
    }

    /// User-facing description shown next to the date fields.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConflictInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Overlap detected with \"{}\" ({} to {}). Please adjust the dates.",
            self.name,
            format_iso_date(self.start_date),
            format_iso_date(self.end_date)
        )
    }
}

/// Strict half-open intersection: touching ranges (`end_a == start_b`) do not overlap.
#[must_use]
pub fn ranges_overlap<T: PartialOrd>(start_a: T, end_a: T, start_b: T, end_b: T) -> bool {
    start_a < end_b && start_b < end_a
}

/// Returns the first entry, in input order, whose range intersects
/// `[start, end)`. The entry with id `exclude_id` is skipped so an entry can
/// be re-validated against its own row while being edited.
#[must_use]
pub fn check_overlap(
    existing: &[ScheduledEntry],
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<&str>,
) -> Option<ConflictInfo> {
    existing
        .iter()
        .filter(|entry| exclude_id != Some(entry.id.as_str()))
        .find(|entry| ranges_overlap(start, end, entry.start_date, entry.end_date))
        .map(ConflictInfo::from_entry)
}

/// String-facing variant for form input.
///
/// A proposed bound that does not parse compares false against everything,
/// so malformed input reports no conflict; rejecting it is the form's job.
#[must_use]
pub fn check_overlap_iso(
    existing: &[ScheduledEntry],
    start: &str,
    end: &str,
    exclude_id: Option<&str>,
) -> Option<ConflictInfo> {
    let (Some(start_date), Some(end_date)) =
        (parse_iso_date_lenient(start), parse_iso_date_lenient(end))
    else {
        trace!(start, end, "skipping overlap check for unparseable range");
        return None;
    };
    check_overlap(existing, start_date, end_date, exclude_id)
}
