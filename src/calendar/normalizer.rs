//! Date/time normalization.
//!
//! Roster dates are typed as `D(D)/Mon/YYYY` and times as `H(H):MM AM|PM`.
//! This module turns such a pair into an absolute instant in a fixed IANA
//! time zone.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;

use crate::error::{RosterError, RosterResult};

/// English month names. A month token must be a prefix of one of these, at
/// least three letters long.
pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MIN_MONTH_TOKEN_LEN: usize = 3;

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/([A-Za-z]+)/(\d{4})").unwrap());

static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*([AP]M)").unwrap());

/// Returns the 1-based month number for a month token.
///
/// # Example
///
/// ```
/// use shift_roster::calendar::month_number;
///
/// assert_eq!(month_number("Jan"), Some(1));
/// assert_eq!(month_number("SEPT"), Some(9));
/// assert_eq!(month_number("december"), Some(12));
/// assert_eq!(month_number("Ju"), None);
/// assert_eq!(month_number("Xyz"), None);
/// ```
pub fn month_number(token: &str) -> Option<u32> {
    let token = token.to_lowercase();
    if token.len() < MIN_MONTH_TOKEN_LEN {
        return None;
    }
    MONTHS
        .iter()
        .position(|name| name.starts_with(&token))
        .map(|index| index as u32 + 1)
}

/// Parses a raw roster date such as `01/Jan/2026` or `1/jan/2026`.
///
/// # Errors
///
/// - `InvalidDateFormat` if no `D/Mon/YYYY` pattern is found
/// - `InvalidMonth` if the month token is not recognized
/// - `NonexistentDate` if the day does not exist in that month
pub fn parse_roster_date(value: &str) -> RosterResult<NaiveDate> {
    let invalid_format = || RosterError::InvalidDateFormat {
        value: value.to_string(),
    };

    let caps = DATE.captures(value).ok_or_else(invalid_format)?;
    let day: u32 = caps[1].parse().map_err(|_| invalid_format())?;
    let year: i32 = caps[3].parse().map_err(|_| invalid_format())?;
    let month = month_number(&caps[2]).ok_or_else(|| RosterError::InvalidMonth {
        value: caps[2].to_string(),
    })?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| RosterError::NonexistentDate {
        value: value.to_string(),
    })
}

/// Parses a raw 12-hour clock time such as `7:30 AM` or `12:00pm`.
///
/// 12 AM is midnight and 12 PM is noon.
///
/// # Errors
///
/// `InvalidTimeFormat` if no `H:MM AM|PM` pattern is found or the clock
/// value does not exist on a 12-hour clock (e.g. `13:00 AM`, `0:30 PM`,
/// `7:75 AM`).
pub fn parse_roster_time(value: &str) -> RosterResult<NaiveTime> {
    let invalid_format = || RosterError::InvalidTimeFormat {
        value: value.to_string(),
    };

    let caps = TIME.captures(value).ok_or_else(invalid_format)?;
    let hour: u32 = caps[1].parse().map_err(|_| invalid_format())?;
    let minute: u32 = caps[2].parse().map_err(|_| invalid_format())?;
    let is_pm = caps[3].eq_ignore_ascii_case("PM");

    let hour = match (hour, is_pm) {
        (0 | 13.., _) => return Err(invalid_format()),
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid_format)
}

/// Converts roster date/time pairs into instants in one time zone.
///
/// # Example
///
/// ```
/// use shift_roster::calendar::DateTimeNormalizer;
///
/// let normalizer = DateTimeNormalizer::new(chrono_tz::Australia::Melbourne);
/// let start = normalizer.normalize("01/Jan/2026", "7:30 AM")?;
/// assert_eq!(start.to_rfc3339(), "2026-01-01T07:30:00+11:00");
/// # Ok::<(), shift_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeNormalizer {
    time_zone: Tz,
}

impl DateTimeNormalizer {
    /// Creates a normalizer for the given zone.
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Returns the zone wall-clock times are read in.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Combines a raw date and a raw time into an absolute instant.
    ///
    /// Seconds are always zero. A wall-clock time that occurs twice (the
    /// hour repeated when daylight saving ends) resolves to the earlier
    /// instant.
    ///
    /// # Errors
    ///
    /// - `MissingInput` if either string is empty
    /// - any error from [`parse_roster_date`] or [`parse_roster_time`]
    /// - `NonexistentLocalTime` if daylight saving skips the wall-clock time
    pub fn normalize(&self, date: &str, time: &str) -> RosterResult<DateTime<Tz>> {
        if date.trim().is_empty() {
            return Err(RosterError::MissingInput { field: "date" });
        }
        if time.trim().is_empty() {
            return Err(RosterError::MissingInput { field: "time" });
        }

        let local = parse_roster_date(date)?.and_time(parse_roster_time(time)?);

        self.time_zone
            .from_local_datetime(&local)
            .earliest()
            .ok_or_else(|| RosterError::NonexistentLocalTime {
                date: date.to_string(),
                time: time.to_string(),
                zone: self.time_zone.name().to_string(),
            })
    }
}

impl Default for DateTimeNormalizer {
    fn default() -> Self {
        Self::new(chrono_tz::Australia::Melbourne)
    }
}

/// Normalizes a roster date/time pair in the default zone
/// (Australia/Melbourne).
///
/// # Example
///
/// ```
/// use shift_roster::calendar::normalize;
/// use shift_roster::error::RosterError;
///
/// let end = normalize("01/Jan/2026", "3:30 PM")?;
/// assert_eq!(end.to_rfc3339(), "2026-01-01T15:30:00+11:00");
///
/// assert!(matches!(
///     normalize("01/Xyz/2026", "7:30 AM"),
///     Err(RosterError::InvalidMonth { .. })
/// ));
/// # Ok::<(), RosterError>(())
/// ```
pub fn normalize(date: &str, time: &str) -> RosterResult<DateTime<Tz>> {
    DateTimeNormalizer::default().normalize(date, time)
}
