//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate event construction and range matching into batch APIs.
//! - Keep CLI and other outer layers decoupled from model details.

pub mod event_feed;
