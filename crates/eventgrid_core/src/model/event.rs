//! Event domain model.
//!
//! # Responsibility
//! - Build a calendar event from a loosely-typed field mapping.
//! - Answer whole-day range questions and serialize back to plain fields.
//!
//! # Invariants
//! - `title` is never empty after construction.
//! - All-day events have `start`/`end` parsed in `Zone::Neutral`.
//! - `end` earlier than `start` is kept as given.
//! - An `Event` is immutable; every operation after construction is
//!   infallible.

use crate::error::{EventError, EventResult};
use crate::model::value::{FieldMap, FieldValue};
use crate::time::all_day;
use crate::time::day_range::{strip_time, DayRange};
use crate::time::parser::{self, Timestamp};
use crate::time::zone::Zone;
use chrono::NaiveDate;
use log::debug;
use serde::{Serialize, Serializer};

pub const FIELD_TITLE: &str = "title";
pub const FIELD_ALL_DAY: &str = "allDay";
pub const FIELD_START: &str = "start";
pub const FIELD_END: &str = "end";

const RESERVED_FIELDS: &[&str] = &[FIELD_TITLE, FIELD_ALL_DAY, FIELD_START, FIELD_END];

const ALL_DAY_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Calendar event built once from raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    title: String,
    raw_title: FieldValue,
    all_day: bool,
    start: Timestamp,
    end: Option<Timestamp>,
    properties: FieldMap,
}

impl Event {
    /// Builds an event from a raw field mapping.
    ///
    /// `zone` is the caller's zone for date-time strings; it is ignored when
    /// the event turns out to be all-day. Null values for `allDay` and `end`
    /// count as absent.
    ///
    /// # Errors
    /// - `EventError::MissingField` when `title` or `start` is absent, null,
    ///   or when `title` is blank or not a scalar.
    /// - `EventError::InvalidDate` when `start`/`end` is not a string or does
    ///   not parse.
    pub fn from_fields(fields: &FieldMap, zone: Option<Zone>) -> EventResult<Self> {
        let result = Self::build(fields, zone);
        if let Err(err) = &result {
            debug!(
                "event=event_build module=model status=error error_code={}",
                err.code()
            );
        }
        result
    }

    /// Decodes a JSON object and builds an event from its fields.
    ///
    /// # Errors
    /// - `EventError::Decode` when `json` is not an object.
    /// - Any error of [`Event::from_fields`].
    pub fn from_json(json: &str, zone: Option<Zone>) -> EventResult<Self> {
        let fields: FieldMap = serde_json::from_str(json)?;
        Self::from_fields(&fields, zone)
    }

    fn build(fields: &FieldMap, zone: Option<Zone>) -> EventResult<Self> {
        let (title, raw_title) = read_title(fields)?;
        let start_raw = present(fields, FIELD_START)
            .ok_or(EventError::MissingField(FIELD_START))
            .and_then(date_text)?;
        let end_raw = present(fields, FIELD_END).map(date_text).transpose()?;

        let all_day = all_day::detect(fields.get(FIELD_ALL_DAY), start_raw, end_raw);
        let zone = parser::resolve_zone(all_day, zone);

        let start = parser::parse(start_raw, zone)?;
        let end = end_raw.map(|raw| parser::parse(raw, zone)).transpose()?;

        let properties = fields
            .iter()
            .filter(|(name, _)| !RESERVED_FIELDS.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Ok(Self {
            title,
            raw_title,
            all_day,
            start,
            end,
            properties,
        })
    }

    /// Title as text; numeric or boolean titles are rendered.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    pub fn start(&self) -> &Timestamp {
        &self.start
    }

    /// `None` means a zero-duration event.
    pub fn end(&self) -> Option<&Timestamp> {
        self.end.as_ref()
    }

    /// Every input field except `title`, `allDay`, `start` and `end`.
    pub fn properties(&self) -> &FieldMap {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&FieldValue> {
        self.properties.get(name)
    }

    /// Returns whether this event touches any day of `[range_start, range_end)`.
    ///
    /// The event occupies its start date through its end date inclusive,
    /// both taken in the zone they were parsed with. Without an end the
    /// event occupies its start date only.
    pub fn is_within_day_range(&self, range_start: NaiveDate, range_end: NaiveDate) -> bool {
        self.is_within(&DayRange::new(range_start, range_end))
    }

    pub fn is_within(&self, range: &DayRange) -> bool {
        let event_start = strip_time(&self.start);
        let event_end = self.end.as_ref().map_or(event_start, strip_time);
        range.contains_span(event_start, event_end)
    }

    /// Serializes back to plain fields.
    ///
    /// Dates are written as `YYYY-MM-DD` for all-day events and
    /// `YYYY-MM-DD HH:MM:SS` otherwise, on the wall clock of the parse zone.
    /// The zone itself is not written, and `end` is omitted when absent.
    /// `title` is written back with its input type.
    pub fn to_fields(&self) -> FieldMap {
        let format = if self.all_day {
            ALL_DAY_FORMAT
        } else {
            DATE_TIME_FORMAT
        };
        let render = |timestamp: &Timestamp| {
            FieldValue::String(timestamp.wall_clock().format(format).to_string())
        };

        let mut fields = self.properties.clone();
        fields.insert(FIELD_TITLE.to_string(), self.raw_title.clone());
        fields.insert(FIELD_START.to_string(), render(&self.start));
        if let Some(end) = &self.end {
            fields.insert(FIELD_END.to_string(), render(end));
        }
        fields
    }

    /// Same as [`Event::to_fields`], as a JSON object.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(FieldValue::Map(self.to_fields()))
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_fields().serialize(serializer)
    }
}

fn present<'a>(fields: &'a FieldMap, name: &str) -> Option<&'a FieldValue> {
    fields.get(name).filter(|value| !value.is_null())
}

fn read_title(fields: &FieldMap) -> EventResult<(String, FieldValue)> {
    let raw = present(fields, FIELD_TITLE).ok_or(EventError::MissingField(FIELD_TITLE))?;
    raw.scalar_text()
        .filter(|title| !title.trim().is_empty())
        .map(|title| (title, raw.clone()))
        .ok_or(EventError::MissingField(FIELD_TITLE))
}

fn date_text(value: &FieldValue) -> EventResult<&str> {
    value.as_str().ok_or_else(|| {
        EventError::InvalidDate(
            value
                .scalar_text()
                .unwrap_or_else(|| "<non-scalar value>".to_string()),
        )
    })
}
