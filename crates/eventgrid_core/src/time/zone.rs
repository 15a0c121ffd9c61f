//! Zones that date strings can be interpreted in.
//!
//! Only two kinds exist: the neutral zone used for all-day values and
//! caller-supplied fixed offsets. No timezone database is consulted.

use crate::error::{EventError, EventResult};
use chrono::{FixedOffset, Offset, Utc};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MAX_OFFSET_SECONDS: i32 = 23 * 3600 + 59 * 60;

/// Zone a wall-clock value is read and printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    /// Offset-free reference zone; calendar days never shift under it.
    #[default]
    Neutral,
    /// Fixed UTC offset supplied by the caller or carried by the input string.
    Fixed(FixedOffset),
}

impl Zone {
    /// Builds a zone from an offset in seconds east of UTC.
    ///
    /// A zero offset collapses to `Zone::Neutral`.
    pub fn from_offset_seconds(seconds: i32) -> EventResult<Self> {
        if seconds == 0 {
            return Ok(Self::Neutral);
        }
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(EventError::InvalidZone(format!("{seconds}s")));
        }
        FixedOffset::east_opt(seconds)
            .map(Self::Fixed)
            .ok_or_else(|| EventError::InvalidZone(format!("{seconds}s")))
    }

    pub fn offset(&self) -> FixedOffset {
        match self {
            Self::Neutral => Utc.fix(),
            Self::Fixed(offset) => *offset,
        }
    }
}

/// Accepts `UTC`, `Z`, `+HH:MM`, `-HH:MM`, `+HHMM` and `+HH`.
impl FromStr for Zone {
    type Err = EventError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.eq_ignore_ascii_case("utc") || value == "Z" {
            return Ok(Self::Neutral);
        }
        let invalid = || EventError::InvalidZone(raw.to_string());

        let (sign, digits) = match value.as_bytes().first() {
            Some(b'+') => (1, &value[1..]),
            Some(b'-') => (-1, &value[1..]),
            _ => return Err(invalid()),
        };
        let digits = digits.replacen(':', "", 1);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let (hours, minutes) = match digits.len() {
            2 => (&digits[..2], "0"),
            4 => (&digits[..2], &digits[2..]),
            _ => return Err(invalid()),
        };
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        Self::from_offset_seconds(sign * (hours * 3600 + minutes * 60)).map_err(|_| invalid())
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Neutral => write!(f, "UTC"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
