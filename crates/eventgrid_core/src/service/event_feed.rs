//! Event feed use-case service.
//!
//! # Responsibility
//! - Turn a batch of raw event mappings into the serialized events that
//!   fall within a day range.
//!
//! # Invariants
//! - Output keeps input order.
//! - The first construction failure aborts the whole batch.

use crate::error::EventResult;
use crate::model::event::Event;
use crate::model::value::FieldMap;
use crate::time::day_range::DayRange;
use crate::time::zone::Zone;
use log::{error, info};
use std::time::Instant;

/// Use-case service for range-filtered event feeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventFeed {
    zone: Option<Zone>,
}

impl EventFeed {
    /// Creates a feed reading non-all-day dates in `zone`.
    pub fn new(zone: Option<Zone>) -> Self {
        Self { zone }
    }

    /// Builds every event in `raw`.
    ///
    /// # Errors
    /// - The first `EventError` raised by [`Event::from_fields`].
    pub fn build_all(&self, raw: &[FieldMap]) -> EventResult<Vec<Event>> {
        raw.iter()
            .map(|fields| Event::from_fields(fields, self.zone))
            .collect()
    }

    /// Returns the serialized form of every event in `raw` that touches
    /// `range`.
    ///
    /// # Contract
    /// - Each kept event is rendered with [`Event::to_fields`].
    /// - Events outside the range are dropped silently.
    ///
    /// # Errors
    /// - The first `EventError` raised while building events.
    pub fn events_within(&self, raw: &[FieldMap], range: &DayRange) -> EventResult<Vec<FieldMap>> {
        let started_at = Instant::now();
        let events = match self.build_all(raw) {
            Ok(events) => events,
            Err(err) => {
                error!(
                    "event=feed_filter module=service status=error input_count={} duration_ms={} error_code={}",
                    raw.len(),
                    started_at.elapsed().as_millis(),
                    err.code()
                );
                return Err(err);
            }
        };

        let kept: Vec<FieldMap> = events
            .iter()
            .filter(|event| event.is_within(range))
            .map(Event::to_fields)
            .collect();

        info!(
            "event=feed_filter module=service status=ok input_count={} kept_count={} range_start={} range_end={} duration_ms={}",
            raw.len(),
            kept.len(),
            range.start,
            range.end,
            started_at.elapsed().as_millis()
        );
        Ok(kept)
    }
}
