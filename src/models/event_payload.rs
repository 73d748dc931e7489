//! Event payload model.
//!
//! The [`EventPayload`] is what the projector hands to the calendar
//! collaborator: a title, a location, a composed description and two
//! absolute instants.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A calendar event ready to be booked.
///
/// Start and end serialize as ISO-8601 strings carrying the zone offset,
/// e.g. `2026-01-01T07:30:00+11:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    /// Fixed label for the deployment (e.g. "Work").
    pub summary: String,
    /// Store location, or an empty string.
    pub location: String,
    /// Multi-line description composed from the shift record.
    pub description: String,
    /// When the shift starts.
    pub start_date_time: DateTime<FixedOffset>,
    /// When the shift finishes.
    pub end_date_time: DateTime<FixedOffset>,
}

impl EventPayload {
    /// Returns the description split into its individual sections.
    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.description.lines()
    }
}
