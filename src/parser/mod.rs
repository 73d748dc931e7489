//! Roster text parsing.
//!
//! This module contains the line classifier, an ordered table of rules that
//! recognizes each kind of roster line, and the parser that folds classified
//! lines into a [`ShiftRecord`](crate::models::ShiftRecord).

mod line_classifier;
mod shift_parser;

pub use line_classifier::{LineKind, LineMatch, WEEKDAYS, classify_line};
pub use shift_parser::parse_shift_schedule;
