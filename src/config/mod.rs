//! Configuration loading for calendar event projection.
//!
//! This module loads the event title, time zone and reminder settings from a
//! YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roster").unwrap();
//! println!("Event title: {}", config.settings().summary);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarSettings, DEFAULT_SUMMARY, DEFAULT_TIME_ZONE, ReminderOverride};
