//! Title uniqueness check run before event input reaches the model.
//!
//! # Responsibility
//! - Reject blank titles and titles already used by another record.
//! - Keep record lookup behind the `TitleLookup` trait.
//!
//! # Invariants
//! - The check never mutates the record store.
//! - `exclude_id` lets an edit keep its own current title.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record store query used by [`check_title`].
pub trait TitleLookup {
    type Error: Display;

    /// Counts records titled exactly `title`, skipping `exclude_id` when set.
    fn count_with_title(&self, title: &str, exclude_id: Option<i64>) -> Result<u64, Self::Error>;
}

/// Title check failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    Empty,
    Duplicate(String),
    Lookup(String),
}

impl Display for TitleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "title must not be empty"),
            Self::Duplicate(title) => write!(f, "title already exists: `{title}`"),
            Self::Lookup(message) => write!(f, "title lookup failed: {message}"),
        }
    }
}

impl Error for TitleError {}

/// Checks that `title` is non-blank and unused by any record other than
/// `exclude_id`.
///
/// # Errors
/// - `TitleError::Empty` for blank titles; the lookup is not queried.
/// - `TitleError::Duplicate` when another record has the same title.
/// - `TitleError::Lookup` when the record store fails.
pub fn check_title<L: TitleLookup>(
    lookup: &L,
    title: &str,
    exclude_id: Option<i64>,
) -> Result<(), TitleError> {
    if title.trim().is_empty() {
        return Err(TitleError::Empty);
    }
    let count = lookup
        .count_with_title(title, exclude_id)
        .map_err(|err| TitleError::Lookup(err.to_string()))?;
    if count > 0 {
        return Err(TitleError::Duplicate(title.to_string()));
    }
    Ok(())
}
