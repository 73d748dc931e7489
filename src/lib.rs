//! Shift roster parser and calendar event projector.
//!
//! This crate turns loosely structured, hand-typed work roster text into a
//! [`ShiftRecord`](models::ShiftRecord) and projects that record into a
//! calendar [`EventPayload`](models::EventPayload) with absolute start and
//! end instants.
//!
//! # Example
//!
//! ```
//! use shift_roster::calendar::create_event_from_shift;
//! use shift_roster::parser::parse_shift_schedule;
//!
//! let record = parse_shift_schedule(
//!     "Thursday 01/Jan/2026\n\
//!      STRATH VILLAGE VIC\n\
//!      Start 7:30 AM Thursday 01/Jan/2026\n\
//!      Finish 3:30 PM Thursday 01/Jan/2026",
//! );
//! let event = create_event_from_shift(&record)?;
//! assert_eq!(event.location, "STRATH VILLAGE VIC");
//! assert_eq!(event.start_date_time.to_rfc3339(), "2026-01-01T07:30:00+11:00");
//! # Ok::<(), shift_roster::error::RosterError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
