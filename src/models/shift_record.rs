//! Shift record model.
//!
//! This module defines [`ShiftRecord`], the normalized form of one pasted
//! roster block, and [`RecordPatch`], the partial update a single roster line
//! contributes to it.

use serde::{Deserialize, Serialize};

/// A parsed work shift, holding the raw tokens exactly as they were typed.
///
/// Every field is optional. A field the roster text never mentioned stays
/// `None`; the record itself always exists.
///
/// # Example
///
/// ```
/// use shift_roster::models::ShiftRecord;
///
/// let record = ShiftRecord::default();
/// assert!(record.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// Weekday name as written (e.g. "Thursday"). Informational only.
    #[serde(default)]
    pub day: Option<String>,
    /// Primary shift date, raw `D(D)/Mon/YYYY`.
    #[serde(default)]
    pub date: Option<String>,
    /// Free-text store or site label.
    #[serde(default)]
    pub store_location: Option<String>,
    /// Raw start time, `H(H):MM AM|PM`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Date the shift starts on, when given on the start line.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Raw finish time, `H(H):MM AM|PM`.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Date the shift finishes on, when given on the finish line.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Raw break start time.
    #[serde(default)]
    pub break_start: Option<String>,
    /// Raw break end time.
    #[serde(default)]
    pub break_end: Option<String>,
    /// Raw `H:MM` total hours. Never checked against start/finish.
    #[serde(default)]
    pub total_hours: Option<String>,
    /// Raw `H:MM` break duration.
    #[serde(default)]
    pub break_hours: Option<String>,
    /// Free-text area or department tag.
    #[serde(default)]
    pub area: Option<String>,
}

impl ShiftRecord {
    /// Returns true when no field has been populated.
    pub fn is_empty(&self) -> bool {
        *self == ShiftRecord::default()
    }

    /// Returns a new record with every field present in `patch` overwritten.
    ///
    /// Fields the patch leaves as `None` keep their current value. The
    /// start and finish dates are replaced whenever the patch carries them,
    /// so `Some(None)` clears a date set by an earlier line.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::models::{RecordPatch, ShiftRecord};
    ///
    /// let record = ShiftRecord::default().apply(RecordPatch {
    ///     total_hours: Some("7:30".to_string()),
    ///     ..RecordPatch::default()
    /// });
    /// assert_eq!(record.total_hours.as_deref(), Some("7:30"));
    /// assert_eq!(record.break_hours, None);
    /// ```
    pub fn apply(self, patch: RecordPatch) -> ShiftRecord {
        ShiftRecord {
            day: patch.day.or(self.day),
            date: patch.date.or(self.date),
            store_location: patch.store_location.or(self.store_location),
            start_time: patch.start_time.or(self.start_time),
            start_date: patch.start_date.unwrap_or(self.start_date),
            end_time: patch.end_time.or(self.end_time),
            end_date: patch.end_date.unwrap_or(self.end_date),
            break_start: patch.break_start.or(self.break_start),
            break_end: patch.break_end.or(self.break_end),
            total_hours: patch.total_hours.or(self.total_hours),
            break_hours: patch.break_hours.or(self.break_hours),
            area: patch.area.or(self.area),
        }
    }
}

/// The fields a single roster line sets.
///
/// A patch with every field `None` is valid: it is what a line produces when
/// it is recognized as, say, a start line but carries no readable time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    /// See [`ShiftRecord::day`].
    pub day: Option<String>,
    /// See [`ShiftRecord::date`].
    pub date: Option<String>,
    /// See [`ShiftRecord::store_location`].
    pub store_location: Option<String>,
    /// See [`ShiftRecord::start_time`].
    pub start_time: Option<String>,
    /// See [`ShiftRecord::start_date`]. `Some(None)` clears the date.
    pub start_date: Option<Option<String>>,
    /// See [`ShiftRecord::end_time`].
    pub end_time: Option<String>,
    /// See [`ShiftRecord::end_date`]. `Some(None)` clears the date.
    pub end_date: Option<Option<String>>,
    /// See [`ShiftRecord::break_start`].
    pub break_start: Option<String>,
    /// See [`ShiftRecord::break_end`].
    pub break_end: Option<String>,
    /// See [`ShiftRecord::total_hours`].
    pub total_hours: Option<String>,
    /// See [`ShiftRecord::break_hours`].
    pub break_hours: Option<String>,
    /// See [`ShiftRecord::area`].
    pub area: Option<String>,
}

impl RecordPatch {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == RecordPatch::default()
    }
}
