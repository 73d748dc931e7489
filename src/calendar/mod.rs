//! Calendar event projection.
//!
//! This module contains the date/time normalizer, which reads roster
//! `D/Mon/YYYY` dates and `H:MM AM|PM` times in a fixed time zone, and the
//! projector that turns a [`ShiftRecord`](crate::models::ShiftRecord) into an
//! [`EventPayload`](crate::models::EventPayload).

mod normalizer;
mod projector;

pub use normalizer::{
    DateTimeNormalizer, MONTHS, month_number, normalize, parse_roster_date, parse_roster_time,
};
pub use projector::{EventProjector, create_event_from_shift};
