//! Error types shared by event construction and date parsing.
//!
//! # Responsibility
//! - Give callers an explicit failure type for `Event` construction.
//! - Keep parse failures tied to the offending input text.
//!
//! # Invariants
//! - Errors are only produced while building values; once an `Event`
//!   exists, none of its operations fail.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EventResult<T> = Result<T, EventError>;

/// Failure raised while turning a raw field mapping into an `Event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Required key (`title` or `start`) absent, null or blank.
    MissingField(&'static str),
    /// Date or date-time string outside the accepted ISO-8601-like formats.
    InvalidDate(String),
    /// Zone string that is neither `UTC`/`Z` nor a fixed offset.
    InvalidZone(String),
    /// Input document could not be decoded into a field mapping.
    Decode(String),
}

impl EventError {
    /// Stable error code without the offending input, safe for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::InvalidDate(_) => "invalid_date",
            Self::InvalidZone(_) => "invalid_zone",
            Self::Decode(_) => "decode_failed",
        }
    }
}

impl Display for EventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "missing required field: {name}"),
            Self::InvalidDate(value) => write!(f, "invalid date or date-time: `{value}`"),
            Self::InvalidZone(value) => write!(f, "invalid zone: `{value}`"),
            Self::Decode(message) => write!(f, "failed to decode event fields: {message}"),
        }
    }
}

impl Error for EventError {}

impl From<serde_json::Error> for EventError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::EventError;

    #[test]
    fn display_names_the_missing_field() {
        let err = EventError::MissingField("title");
        assert_eq!(err.to_string(), "missing required field: title");
    }

    #[test]
    fn code_omits_the_input_text() {
        let err = EventError::InvalidDate("2020-13-40 secret".to_string());
        assert_eq!(err.code(), "invalid_date");
        assert_eq!(EventError::MissingField("start").code(), "missing_field");
    }

    #[test]
    fn display_quotes_invalid_input() {
        let err = EventError::InvalidDate("2020-13-40".to_string());
        assert!(err.to_string().contains("`2020-13-40`"));
    }
}
