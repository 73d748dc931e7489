//! Calendar insert body.
//!
//! This module shapes an [`EventPayload`] into the resource the external
//! calendar service expects when a new event is inserted. Sending it is the
//! caller's job.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::config::{CalendarSettings, ReminderOverride};

use super::EventPayload;

/// A start or end point in the calendar service's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    /// The absolute instant.
    pub date_time: DateTime<FixedOffset>,
    /// IANA zone the event is displayed in.
    pub time_zone: String,
}

/// An invited attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// The attendee's email address.
    pub email: String,
}

/// Reminder configuration attached to the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReminders {
    /// Whether the calendar's default reminders apply.
    pub use_default: bool,
    /// Explicit reminders.
    pub overrides: Vec<ReminderOverride>,
}

/// The insert body for one shift event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Event title.
    pub summary: String,
    /// Event location.
    pub location: String,
    /// Event description.
    pub description: String,
    /// Event start.
    pub start: EventDateTime,
    /// Event end.
    pub end: EventDateTime,
    /// Invited attendees.
    pub attendees: Vec<Attendee>,
    /// `transparent` shows the slot as free, `opaque` as busy.
    pub transparency: String,
    /// Reminder settings.
    pub reminders: EventReminders,
}

impl CalendarEvent {
    /// Builds the insert body for `payload`.
    ///
    /// Attendee addresses are trimmed, blank entries are dropped and an
    /// address repeated with different casing is kept only once.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::DateTime;
    /// use shift_roster::config::CalendarSettings;
    /// use shift_roster::models::{CalendarEvent, EventPayload};
    ///
    /// let payload = EventPayload {
    ///     summary: "Work".to_string(),
    ///     location: String::new(),
    ///     description: String::new(),
    ///     start_date_time: DateTime::parse_from_rfc3339("2026-01-01T07:30:00+11:00").unwrap(),
    ///     end_date_time: DateTime::parse_from_rfc3339("2026-01-01T15:30:00+11:00").unwrap(),
    /// };
    ///
    /// let attendees = vec!["sam@example.com".to_string(), " ".to_string()];
    /// let event = CalendarEvent::from_payload(&payload, &attendees, &CalendarSettings::default());
    /// assert_eq!(event.attendees.len(), 1);
    /// assert_eq!(event.start.time_zone, "Australia/Melbourne");
    /// ```
    pub fn from_payload(
        payload: &EventPayload,
        attendees: &[String],
        settings: &CalendarSettings,
    ) -> Self {
        let mut seen = HashSet::new();
        let attendees = attendees
            .iter()
            .map(|email| email.trim())
            .filter(|email| !email.is_empty())
            .filter(|email| seen.insert(email.to_lowercase()))
            .map(|email| Attendee {
                email: email.to_string(),
            })
            .collect();

        CalendarEvent {
            summary: payload.summary.clone(),
            location: payload.location.clone(),
            description: payload.description.clone(),
            start: EventDateTime {
                date_time: payload.start_date_time,
                time_zone: settings.time_zone.clone(),
            },
            end: EventDateTime {
                date_time: payload.end_date_time,
                time_zone: settings.time_zone.clone(),
            },
            attendees,
            transparency: settings.transparency.clone(),
            reminders: EventReminders {
                use_default: false,
                overrides: settings.reminders.clone(),
            },
        }
    }
}
