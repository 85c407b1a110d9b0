//! Error types for the diff engine.
//!
//! The LCS computation itself is total. Every variant here comes from the
//! layers around it: the capacity guard, cancellation, and configuration.

use std::fmt;

/// Which input a line-count limit was exceeded on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// Errors that can occur around a diff computation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The alignment table would exceed the configured cell budget.
    #[error(
        "alignment table for {old_lines} x {new_lines} lines needs {cells} cells, limit is {limit}"
    )]
    Capacity {
        old_lines: usize,
        new_lines: usize,
        cells: u64,
        limit: u64,
    },

    /// One input has more lines than the configured maximum.
    #[error("{side} input has {lines} lines, limit is {limit}")]
    TooManyLines {
        side: Side,
        lines: usize,
        limit: usize,
    },

    /// The computation was cancelled before the table was complete.
    #[error("diff cancelled")]
    Cancelled,

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DiffError {
    /// Returns `true` for the resource-exhaustion family of errors.
    pub fn is_capacity(&self) -> bool {
        matches!(self, DiffError::Capacity { .. } | DiffError::TooManyLines { .. })
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
