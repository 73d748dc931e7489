//! HTTP API module for the shift roster parser.
//!
//! This module provides the REST endpoints a front end calls to parse pasted
//! roster text and to prepare calendar insert bodies. Authentication and the
//! calls to the calendar service itself live outside this crate.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalendarEventRequest, ParseRequest};
pub use response::{ApiError, CalendarEventResponse, ParseResponse};
pub use state::AppState;
