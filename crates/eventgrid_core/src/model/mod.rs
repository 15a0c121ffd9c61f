//! Event domain model and the loosely-typed values it is built from.
//!
//! # Responsibility
//! - Define the canonical `Event` shape used by core business logic.
//! - Keep pass-through input fields typed without losing their shape.
//!
//! # Invariants
//! - Events are built once from raw fields and never mutated.

pub mod event;
pub mod value;
