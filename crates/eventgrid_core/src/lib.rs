//! Core domain logic for eventgrid.
//! This crate is the single source of truth for calendar event invariants.

pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod time;
pub mod validate;

pub use error::{EventError, EventResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::Event;
pub use model::value::{FieldMap, FieldValue};
pub use service::event_feed::EventFeed;
pub use time::day_range::DayRange;
pub use time::parser::Timestamp;
pub use time::zone::Zone;
pub use validate::title::{check_title, TitleError, TitleLookup};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
