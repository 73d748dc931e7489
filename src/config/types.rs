//! Configuration types for calendar event projection.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::{Deserialize, Serialize};

/// The zone roster times are read in when none is configured.
pub const DEFAULT_TIME_ZONE: &str = "Australia/Melbourne";

/// The event title used when none is configured.
pub const DEFAULT_SUMMARY: &str = "Work";

/// A single reminder attached to created events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOverride {
    /// Delivery method understood by the calendar service (e.g. "popup").
    pub method: String,
    /// Minutes before the event start.
    pub minutes: u32,
}

/// Settings from `calendar.yaml`.
///
/// Only `summary` and `time_zone` are required in the file; the remaining
/// fields fall back to a free (transparent) event with a 30 minute popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSettings {
    /// Fixed title for every projected event.
    pub summary: String,
    /// IANA zone roster dates and times are interpreted in.
    pub time_zone: String,
    /// Calendar transparency: "transparent" (free) or "opaque" (busy).
    #[serde(default = "default_transparency")]
    pub transparency: String,
    /// Reminders attached to created events.
    #[serde(default = "default_reminders")]
    pub reminders: Vec<ReminderOverride>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            summary: DEFAULT_SUMMARY.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            transparency: default_transparency(),
            reminders: default_reminders(),
        }
    }
}

fn default_transparency() -> String {
    "transparent".to_string()
}

fn default_reminders() -> Vec<ReminderOverride> {
    vec![ReminderOverride {
        method: "popup".to_string(),
        minutes: 30,
    }]
}
