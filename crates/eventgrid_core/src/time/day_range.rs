//! Whole-day range matching.
//!
//! # Responsibility
//! - Reduce timestamps to date-only values.
//! - Test an inclusive event span against a half-open caller range.
//!
//! # Invariants
//! - The caller range is `[start, end)`; the event span is `[start, end]`.
//! - Inverted spans (`end < start`) are evaluated with the same formula and
//!   never rejected.

use crate::error::EventResult;
use crate::time::parser::{self, Timestamp};
use crate::time::zone::Zone;
use chrono::NaiveDate;

/// Drops the time-of-day, keeping the date seen in the parse zone.
pub fn strip_time(timestamp: &Timestamp) -> NaiveDate {
    timestamp.date()
}

/// Half-open range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Builds a range from date or date-time strings.
    ///
    /// Both bounds are read in `Zone::Neutral` and stripped to their date.
    ///
    /// # Errors
    /// - `EventError::InvalidDate` when either bound does not parse.
    pub fn parse(start: &str, end: &str) -> EventResult<Self> {
        let start = parser::parse(start, Zone::Neutral)?;
        let end = parser::parse(end, Zone::Neutral)?;
        Ok(Self::new(strip_time(&start), strip_time(&end)))
    }

    /// Returns whether the inclusive span `[event_start, event_end]` overlaps
    /// this range.
    ///
    /// A span ending on `self.start` overlaps; a span starting on `self.end`
    /// does not.
    pub fn contains_span(&self, event_start: NaiveDate, event_end: NaiveDate) -> bool {
        event_start < self.end && event_end >= self.start
    }
}
