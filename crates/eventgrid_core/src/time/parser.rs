//! Date and date-time parsing with zone policy.
//!
//! # Responsibility
//! - Convert ISO-8601-like strings into absolute timestamps.
//! - Keep the zone each timestamp was read in, so wall-clock output can be
//!   reproduced later.
//!
//! # Invariants
//! - An offset written in the input string wins over the supplied zone.
//! - All-day values are always read in `Zone::Neutral`.

use crate::error::{EventError, EventResult};
use crate::time::zone::Zone;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

// date, optional `T`/space separated time, optional `Z`/offset suffix.
static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{4}-[0-9]{2}-[0-9]{2})(?:[T ]([0-9]{2}:[0-9]{2}(?::[0-9]{2}(?:\.[0-9]+)?)?)(Z|[+-][0-9]{2}(?::?[0-9]{2})?)?)?$",
    )
    .expect("valid date-time regex")
});

/// Absolute point in time plus the zone it was parsed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    instant: DateTime<FixedOffset>,
    zone: Zone,
}

impl Timestamp {
    /// Instant carrying the wall-clock offset of `zone`.
    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Calendar date as seen on the wall clock of the parse zone.
    pub fn date(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    pub fn wall_clock(&self) -> NaiveDateTime {
        self.instant.naive_local()
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }
}

/// Picks the zone date strings are parsed in.
///
/// All-day events ignore the caller zone; otherwise the caller zone applies
/// and defaults to `Zone::Neutral`.
pub fn resolve_zone(all_day: bool, zone: Option<Zone>) -> Zone {
    if all_day {
        Zone::Neutral
    } else {
        zone.unwrap_or(Zone::Neutral)
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]` and the date-time
/// forms followed by `Z` or a `±HH[:MM]` offset.
///
/// Date-only values land at midnight in `zone`.
///
/// # Errors
/// - `EventError::InvalidDate` when the layout does not match or the
///   calendar date/time does not exist.
pub fn parse(value: &str, zone: Zone) -> EventResult<Timestamp> {
    let invalid = || EventError::InvalidDate(value.to_string());
    let trimmed = value.trim();
    let captures = DATE_TIME_RE.captures(trimmed).ok_or_else(invalid)?;

    let date = captures
        .get(1)
        .and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
        .ok_or_else(invalid)?;
    let time = match captures.get(2) {
        Some(m) => parse_time(m.as_str()).ok_or_else(invalid)?,
        None => NaiveTime::default(),
    };
    let zone = match captures.get(3) {
        Some(m) => m.as_str().parse::<Zone>().map_err(|_| invalid())?,
        None => zone,
    };

    let instant = date
        .and_time(time)
        .and_local_timezone(zone.offset())
        .single()
        .ok_or_else(invalid)?;
    Ok(Timestamp { instant, zone })
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    let layout = if value.contains('.') {
        "%H:%M:%S%.f"
    } else if value.matches(':').count() == 2 {
        "%H:%M:%S"
    } else {
        "%H:%M"
    };
    NaiveTime::parse_from_str(value, layout).ok()
}
