//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The column key is empty or contains whitespace.
    #[error("invalid column key '{0}', expected a non-empty tag without whitespace")]
    InvalidColumnKey(String),

    /// The due date input is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// The calendar date cannot be placed on the local timeline.
    #[error("due date {0} has no representable local midnight")]
    UnrepresentableDueDate(String),

    /// The task identifier could not be parsed.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),
}
