//! Error types for the shift roster parser.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Parsing roster text never fails; every variant here is raised either while
//! normalizing a raw date/time pair or while loading configuration.

use thiserror::Error;

/// The main error type for the shift roster crate.
///
/// # Example
///
/// ```
/// use shift_roster::error::RosterError;
///
/// let error = RosterError::InvalidMonth {
///     value: "Xyz".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid month: Xyz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A date or time needed for normalization was absent or empty.
    #[error("Date and time are required: missing {field}")]
    MissingInput {
        /// Which input was missing ("date" or "time").
        field: &'static str,
    },

    /// The date string does not look like `D/Mon/YYYY`.
    #[error("Invalid date format: {value}")]
    InvalidDateFormat {
        /// The raw date string.
        value: String,
    },

    /// The month token is not a recognized English month name.
    #[error("Invalid month: {value}")]
    InvalidMonth {
        /// The raw month token.
        value: String,
    },

    /// The time string does not look like `H:MM AM|PM`, or names a clock
    /// value that does not exist.
    #[error("Invalid time format: {value}")]
    InvalidTimeFormat {
        /// The raw time string.
        value: String,
    },

    /// The date matched the pattern but is not a real calendar day.
    #[error("Date does not exist: {value}")]
    NonexistentDate {
        /// The raw date string.
        value: String,
    },

    /// The wall-clock time is skipped by a daylight-saving transition.
    #[error("Local time {date} {time} does not exist in {zone}")]
    NonexistentLocalTime {
        /// The raw date string.
        date: String,
        /// The raw time string.
        time: String,
        /// The IANA zone name.
        zone: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The configured time zone is not a known IANA zone.
    #[error("Unknown time zone: {name}")]
    InvalidTimeZone {
        /// The configured zone name.
        name: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
