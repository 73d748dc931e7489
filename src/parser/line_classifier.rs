//! Line classification for pasted roster text.
//!
//! Each trimmed roster line is matched against an ordered table of rules.
//! The first rule whose guard accepts the line claims it and produces a
//! [`RecordPatch`]; later rules never see that line. A claimed line may still
//! yield an empty patch, e.g. a "Start" line with no readable time.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{RecordPatch, ShiftRecord};

/// Full weekday names, in the order they are matched.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Lowercased words that stop a line from being taken as the store location.
const NON_LOCATION_WORDS: [&str; 4] = ["start", "finish", "break", "hrs"];

/// A raw `H(H):MM AM|PM` clock token.
const CLOCK: &str = r"\d{1,2}:\d{2}\s*[AP]M";

fn weekday_alternation() -> String {
    WEEKDAYS.join("|")
}

static WEEKDAY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^({})\s+(.+)$", weekday_alternation())).unwrap()
});

static START: LazyLock<Regex> = LazyLock::new(|| clock_line_regex("Start"));

static FINISH: LazyLock<Regex> = LazyLock::new(|| clock_line_regex("Finish"));

static BREAK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)Break time\s+({CLOCK})\s*-\s*({CLOCK})")).unwrap()
});

// Case-sensitive: "7:30HRS" claims the line but records no total.
static TOTAL_HOURS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+:\d+)hrs").unwrap());

static BREAK_HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\+(\d+:\d+)hrs\s*Break").unwrap());

/// `<keyword> <clock> [<weekday>] [<date>]`
fn clock_line_regex(keyword: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)^{keyword}\s+({CLOCK})(?:\s+(?:{})?\s*(.+)?)?$",
        weekday_alternation()
    ))
    .unwrap()
}

/// The semantic field a roster line was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// "Thursday 01/Jan/2026"
    Weekday,
    /// "STRATH VILLAGE VIC"
    Location,
    /// "Start 7:30 AM Thursday 01/Jan/2026"
    Start,
    /// "Finish 3:30 PM Thursday 01/Jan/2026"
    Finish,
    /// "Break time 11:30 AM - 12:00 PM"
    BreakTime,
    /// "7:30hrs +0:30hrs Break"
    Hours,
    /// "DT2:DT Intermediate - OTC"
    Area,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::Weekday => write!(f, "weekday"),
            LineKind::Location => write!(f, "location"),
            LineKind::Start => write!(f, "start"),
            LineKind::Finish => write!(f, "finish"),
            LineKind::BreakTime => write!(f, "break_time"),
            LineKind::Hours => write!(f, "hours"),
            LineKind::Area => write!(f, "area"),
        }
    }
}

/// A line claimed by a rule, with the fields it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Which rule claimed the line.
    pub kind: LineKind,
    /// Fields to merge into the record.
    pub patch: RecordPatch,
}

struct LineRule {
    kind: LineKind,
    applies: fn(&str, &ShiftRecord) -> bool,
    extract: fn(&str, &ShiftRecord) -> RecordPatch,
}

/// Rules in priority order.
static RULES: [LineRule; 7] = [
    LineRule {
        kind: LineKind::Weekday,
        applies: applies_weekday,
        extract: extract_weekday,
    },
    LineRule {
        kind: LineKind::Location,
        applies: applies_location,
        extract: extract_location,
    },
    LineRule {
        kind: LineKind::Start,
        applies: applies_start,
        extract: extract_start,
    },
    LineRule {
        kind: LineKind::Finish,
        applies: applies_finish,
        extract: extract_finish,
    },
    LineRule {
        kind: LineKind::BreakTime,
        applies: applies_break_time,
        extract: extract_break_time,
    },
    LineRule {
        kind: LineKind::Hours,
        applies: applies_hours,
        extract: extract_hours,
    },
    LineRule {
        kind: LineKind::Area,
        applies: applies_area,
        extract: extract_area,
    },
];

/// Classifies one trimmed, non-empty roster line.
///
/// `record` is the record built from the preceding lines; several rules
/// depend on it (the date is only taken once, the location only after the
/// date, the area only once).
///
/// # Returns
///
/// The first matching rule's [`LineMatch`], or `None` when no rule wants the
/// line.
///
/// # Example
///
/// ```
/// use shift_roster::models::ShiftRecord;
/// use shift_roster::parser::{classify_line, LineKind};
///
/// let matched = classify_line("Break time 11:30 AM - 12:00 PM", &ShiftRecord::default()).unwrap();
/// assert_eq!(matched.kind, LineKind::BreakTime);
/// assert_eq!(matched.patch.break_start.as_deref(), Some("11:30 AM"));
/// assert_eq!(matched.patch.break_end.as_deref(), Some("12:00 PM"));
///
/// assert!(classify_line("see you then", &ShiftRecord::default()).is_none());
/// ```
pub fn classify_line(line: &str, record: &ShiftRecord) -> Option<LineMatch> {
    RULES
        .iter()
        .find(|rule| (rule.applies)(line, record))
        .map(|rule| LineMatch {
            kind: rule.kind,
            patch: (rule.extract)(line, record),
        })
}

fn applies_weekday(line: &str, record: &ShiftRecord) -> bool {
    let lower = line.to_lowercase();
    record.date.is_none()
        && WEEKDAYS
            .iter()
            .any(|day| lower.starts_with(&day.to_lowercase()))
}

fn extract_weekday(line: &str, _record: &ShiftRecord) -> RecordPatch {
    match WEEKDAY_DATE.captures(line) {
        Some(caps) => RecordPatch {
            day: Some(caps[1].to_string()),
            date: Some(caps[2].to_string()),
            ..RecordPatch::default()
        },
        None => RecordPatch::default(),
    }
}

fn applies_location(line: &str, record: &ShiftRecord) -> bool {
    let lower = line.to_lowercase();
    record.date.is_some()
        && record.store_location.is_none()
        && !NON_LOCATION_WORDS.iter().any(|word| lower.contains(word))
}

fn extract_location(line: &str, _record: &ShiftRecord) -> RecordPatch {
    RecordPatch {
        store_location: Some(line.to_string()),
        ..RecordPatch::default()
    }
}

fn applies_start(line: &str, _record: &ShiftRecord) -> bool {
    line.to_lowercase().starts_with("start")
}

fn extract_start(line: &str, record: &ShiftRecord) -> RecordPatch {
    match extract_clock_line(&START, line, record) {
        Some((time, date)) => RecordPatch {
            start_time: Some(time),
            start_date: Some(date),
            ..RecordPatch::default()
        },
        None => RecordPatch::default(),
    }
}

fn applies_finish(line: &str, _record: &ShiftRecord) -> bool {
    line.to_lowercase().starts_with("finish")
}

fn extract_finish(line: &str, record: &ShiftRecord) -> RecordPatch {
    match extract_clock_line(&FINISH, line, record) {
        Some((time, date)) => RecordPatch {
            end_time: Some(time),
            end_date: Some(date),
            ..RecordPatch::default()
        },
        None => RecordPatch::default(),
    }
}

/// Returns the clock token and the date it applies to. Without a trailing
/// date the shift's primary date is used, which may itself be unset.
fn extract_clock_line(
    pattern: &Regex,
    line: &str,
    record: &ShiftRecord,
) -> Option<(String, Option<String>)> {
    let caps = pattern.captures(line)?;
    let time = caps[1].trim().to_string();
    let date = caps
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| record.date.clone());
    Some((time, date))
}

fn applies_break_time(line: &str, _record: &ShiftRecord) -> bool {
    line.to_lowercase().contains("break time")
}

fn extract_break_time(line: &str, _record: &ShiftRecord) -> RecordPatch {
    match BREAK_TIME.captures(line) {
        Some(caps) => RecordPatch {
            break_start: Some(caps[1].trim().to_string()),
            break_end: Some(caps[2].trim().to_string()),
            ..RecordPatch::default()
        },
        None => RecordPatch::default(),
    }
}

fn applies_hours(line: &str, _record: &ShiftRecord) -> bool {
    line.to_lowercase().contains("hrs")
}

fn extract_hours(line: &str, _record: &ShiftRecord) -> RecordPatch {
    RecordPatch {
        total_hours: TOTAL_HOURS.captures(line).map(|caps| caps[1].to_string()),
        break_hours: BREAK_HOURS.captures(line).map(|caps| caps[1].to_string()),
        ..RecordPatch::default()
    }
}

fn applies_area(line: &str, record: &ShiftRecord) -> bool {
    record.area.is_none() && (line.contains(':') || line.contains("DT") || line.contains("OTC"))
}

fn extract_area(line: &str, _record: &ShiftRecord) -> RecordPatch {
    RecordPatch {
        area: Some(line.to_string()),
        ..RecordPatch::default()
    }
}
