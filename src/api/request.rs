//! Request types for the shift roster API.

use serde::{Deserialize, Serialize};

use crate::models::EventPayload;

/// Request body for the `/parse` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseRequest {
    /// The pasted roster text.
    #[serde(default)]
    pub text: Option<String>,
}

/// Request body for the `/calendar-event` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventRequest {
    /// Target calendar in the external calendar service.
    #[serde(default)]
    pub calendar_id: Option<String>,
    /// The event payload, usually as returned by `/parse`.
    #[serde(default)]
    pub event_details: Option<EventPayload>,
    /// Email addresses to invite.
    #[serde(default)]
    pub attendees: Vec<String>,
}
