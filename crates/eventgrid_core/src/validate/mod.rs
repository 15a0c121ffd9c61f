//! Input checks owned by the surrounding application layer.
//!
//! # Responsibility
//! - Declare the record-store seam used for title uniqueness.
//!
//! # Invariants
//! - The event model never calls into this module.

pub mod title;
