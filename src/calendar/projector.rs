//! Shift record to event payload projection.

use crate::config::DEFAULT_SUMMARY;
use crate::error::RosterResult;
use crate::models::{EventPayload, ShiftRecord};

use super::normalizer::DateTimeNormalizer;

/// Builds calendar event payloads from shift records.
///
/// # Example
///
/// ```
/// use shift_roster::calendar::{DateTimeNormalizer, EventProjector};
/// use shift_roster::parser::parse_shift_schedule;
///
/// let record = parse_shift_schedule(
///     "Thursday 01/Jan/2026\nStart 7:30 AM\nFinish 3:30 PM\n7:30hrs +0:30hrs Break",
/// );
/// let projector = EventProjector::new("Work", DateTimeNormalizer::default());
/// let payload = projector.project(&record)?;
///
/// assert_eq!(payload.description, "Total Hours: 7:30 (Break: 0:30)");
/// assert_eq!(payload.end_date_time.to_rfc3339(), "2026-01-01T15:30:00+11:00");
/// # Ok::<(), shift_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventProjector {
    summary: String,
    normalizer: DateTimeNormalizer,
}

impl EventProjector {
    /// Creates a projector that titles every event with `summary`.
    pub fn new(summary: impl Into<String>, normalizer: DateTimeNormalizer) -> Self {
        Self {
            summary: summary.into(),
            normalizer,
        }
    }

    /// Returns the event title.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Projects a shift record into an event payload.
    ///
    /// The start instant comes from `start_date` (or `date`) and
    /// `start_time`; the end instant from `end_date` (or `date`) and
    /// `end_time`. The start is normalized first, so when both are broken
    /// the start's error is the one returned.
    ///
    /// # Errors
    ///
    /// Any [`DateTimeNormalizer::normalize`] error, unchanged.
    pub fn project(&self, record: &ShiftRecord) -> RosterResult<EventPayload> {
        let start = self.normalizer.normalize(
            date_or_fallback(&record.start_date, &record.date),
            record.start_time.as_deref().unwrap_or_default(),
        )?;
        let end = self.normalizer.normalize(
            date_or_fallback(&record.end_date, &record.date),
            record.end_time.as_deref().unwrap_or_default(),
        )?;

        Ok(EventPayload {
            summary: self.summary.clone(),
            location: record.store_location.clone().unwrap_or_default(),
            description: describe(record),
            start_date_time: start.fixed_offset(),
            end_date_time: end.fixed_offset(),
        })
    }
}

impl Default for EventProjector {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY, DateTimeNormalizer::default())
    }
}

fn date_or_fallback<'a>(specific: &'a Option<String>, shift_date: &'a Option<String>) -> &'a str {
    specific
        .as_deref()
        .filter(|date| !date.is_empty())
        .or(shift_date.as_deref())
        .unwrap_or_default()
}

/// Composes the description sections that have data, in fixed order.
fn describe(record: &ShiftRecord) -> String {
    let mut sections = Vec::new();

    if let Some(location) = &record.store_location {
        sections.push(format!("Location: {location}"));
    }
    if let (Some(start), Some(end)) = (&record.break_start, &record.break_end) {
        sections.push(format!("Break: {start} - {end}"));
    }
    if let Some(total) = &record.total_hours {
        match &record.break_hours {
            Some(break_hours) => {
                sections.push(format!("Total Hours: {total} (Break: {break_hours})"))
            }
            None => sections.push(format!("Total Hours: {total}")),
        }
    }
    if let Some(area) = &record.area {
        sections.push(format!("Area: {area}"));
    }

    sections.join("\n").trim().to_string()
}

/// Projects a shift record with the default title ("Work") and zone
/// (Australia/Melbourne).
pub fn create_event_from_shift(record: &ShiftRecord) -> RosterResult<EventPayload> {
    EventProjector::default().project(record)
}
