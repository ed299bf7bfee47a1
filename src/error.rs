//! Unified error types for chatpulse.
//!
//! This module provides a single [`ChatpulseError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! There are no transient failure classes here: the library performs no
//! network or service calls, so nothing is retried. Every error propagates
//! synchronously to the caller of the processing entry point.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// This type is broadly used across the library for any operation that
/// may produce an error.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::timeline::Timeline;
///
/// fn my_function() -> Result<Timeline> {
///     // ... operations that may fail
///     Ok(Timeline::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpulseError>;

/// The error type for all chatpulse operations.
///
/// This enum represents all possible errors that can occur when processing
/// a chat log. Each variant contains context about what went wrong and,
/// where applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpulseError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A message line could not be parsed.
    ///
    /// This is fatal for the whole processing call: a line classified as a
    /// chat message must carry a valid `[HH:MM:SS]` timestamp and a
    /// `<username>` field.
    #[error("Failed to parse message at line {line_number}: {reason} (line: {line:?})")]
    Parse {
        /// 1-based line number of the offending line
        line_number: usize,
        /// The offending line, verbatim
        line: String,
        /// Description of what's wrong
        reason: String,
    },

    /// The file structure doesn't match the expected chat-log layout.
    ///
    /// This occurs when e.g. a session-start marker carries an unreadable
    /// date.
    #[error("Invalid {context}: {message}")]
    InvalidFormat {
        /// What was being interpreted (e.g., "session-start marker")
        context: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// A chat message appeared before any session-start marker.
    ///
    /// Messages carry only a time of day; without a start marker there is no
    /// calendar date to anchor them to. Configure
    /// [`MissingStartPolicy::AssumeDate`](crate::config::MissingStartPolicy)
    /// to process such files anyway.
    #[error(
        "Message at line {line_number} appeared before any session-start marker; \
         no date context available"
    )]
    MissingSessionStart {
        /// 1-based line number of the first dateless message
        line_number: usize,
    },

    /// Invalid date supplied in configuration or CLI arguments.
    ///
    /// Dates are expected in YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    ///
    /// This can occur when writing the formatted series to CSV.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    ///
    /// This can occur when writing the formatted series to JSON.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpulseError {
    /// Creates a parse error for a malformed message line.
    pub fn parse_line(
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ChatpulseError::Parse {
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(context: &'static str, message: impl Into<String>) -> Self {
        ChatpulseError::InvalidFormat {
            context,
            message: message.into(),
        }
    }

    /// Creates a missing session-start error.
    pub fn missing_session_start(line_number: usize) -> Self {
        ChatpulseError::MissingSessionStart { line_number }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatpulseError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpulseError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatpulseError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatpulseError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a missing session-start error.
    pub fn is_missing_session_start(&self) -> bool {
        matches!(self, ChatpulseError::MissingSessionStart { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatpulseError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
