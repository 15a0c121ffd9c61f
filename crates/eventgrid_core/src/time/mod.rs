//! Date handling for events: all-day detection, zone-aware parsing and
//! whole-day range matching.
//!
//! # Responsibility
//! - Own every rule that turns date strings into comparable values.
//!
//! # Invariants
//! - No function here reads the system clock or a timezone database.

pub mod all_day;
pub mod day_range;
pub mod parser;
pub mod zone;
