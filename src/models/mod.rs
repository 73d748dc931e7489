//! Core data models for the shift roster crate.
//!
//! This module contains the shift record produced by the parser, the event
//! payload produced by the projector, and the calendar insert body.

mod calendar_event;
mod event_payload;
mod shift_record;

pub use calendar_event::{Attendee, CalendarEvent, EventDateTime, EventReminders};
pub use event_payload::EventPayload;
pub use shift_record::{RecordPatch, ShiftRecord};
