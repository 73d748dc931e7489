//! Roster text parsing.
//!
//! This module turns a pasted roster block into a [`ShiftRecord`] by folding
//! the per-line patches from [`classify_line`] over an empty record.

use tracing::debug;

use crate::models::ShiftRecord;

use super::line_classifier::classify_line;

/// Parses free-text roster into a shift record.
///
/// The text is split into lines, each line is trimmed and blank lines are
/// dropped. The remaining lines are classified in order, each against the
/// record built so far. Lines no rule recognizes are skipped.
///
/// This never fails: text with nothing recognizable yields a record with
/// every field `None`. Whether the record holds enough to build an event is
/// decided later, by the projector.
///
/// # Example
///
/// ```
/// use shift_roster::parser::parse_shift_schedule;
///
/// let record = parse_shift_schedule(
///     "Thursday 01/Jan/2026\n\
///      STRATH VILLAGE VIC\n\
///      Start 7:30 AM Thursday 01/Jan/2026\n\
///      Finish 3:30 PM Thursday 01/Jan/2026",
/// );
///
/// assert_eq!(record.day.as_deref(), Some("Thursday"));
/// assert_eq!(record.store_location.as_deref(), Some("STRATH VILLAGE VIC"));
/// assert_eq!(record.start_time.as_deref(), Some("7:30 AM"));
/// assert_eq!(record.end_time.as_deref(), Some("3:30 PM"));
/// ```
pub fn parse_shift_schedule(text: &str) -> ShiftRecord {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(ShiftRecord::default(), |record, line| {
            match classify_line(line, &record) {
                Some(matched) => {
                    debug!(line, kind = %matched.kind, "Classified roster line");
                    record.apply(matched.patch)
                }
                None => {
                    debug!(line, "Skipping unrecognized roster line");
                    record
                }
            }
        })
}
