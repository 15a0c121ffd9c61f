//! All-day detection from raw event input.
//!
//! # Responsibility
//! - Decide whether an event has a time-of-day component.
//!
//! # Invariants
//! - An explicit `allDay` value always wins over the date-shape heuristic.
//! - Detection never fails.

use crate::model::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only, no time part: "2013-12-29". One trailing newline is
// tolerated, matching PCRE's `$`.
static DATE_ONLY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}\n?$").expect("valid date-only regex")
});

/// Returns whether `value` is a bare `YYYY-MM-DD` date, optionally followed
/// by a single `\n`.
pub fn is_date_only(value: &str) -> bool {
    DATE_ONLY_RE.is_match(value)
}

/// Decides the all-day flag for one event.
///
/// `raw_all_day` is the value of the input's `allDay` key; a null value is
/// treated as absent. Without an explicit flag the event is all-day iff
/// `start` is date-only and `end` is either absent or date-only too.
pub fn detect(raw_all_day: Option<&FieldValue>, start: &str, end: Option<&str>) -> bool {
    match raw_all_day {
        Some(value) if !value.is_null() => value.is_truthy(),
        _ => is_date_only(start) && end.map_or(true, is_date_only),
    }
}
