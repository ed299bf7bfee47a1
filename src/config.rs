//! Configuration for log processing.
//!
//! All processing behavior is driven by an explicit [`ProcessConfig`] passed
//! into the processor; there is no process-wide mutable state.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::ProcessConfig;
//! use chatpulse::normalize::StopWords;
//!
//! let config = ProcessConfig::new()
//!     .with_top_words(5)
//!     .with_stop_words(StopWords::none());
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize::StopWords;

/// Policy for chat messages that appear before any session-start marker.
///
/// Such messages carry only a time of day; without a start marker there is
/// no calendar date to anchor them to. The behavior is an explicit choice
/// rather than an accident of input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingStartPolicy {
    /// Fail the processing call with
    /// [`MissingSessionStart`](crate::error::ChatpulseError::MissingSessionStart).
    #[default]
    Reject,

    /// Seed the date context with a synthetic date and continue.
    AssumeDate(NaiveDate),
}

/// Configuration for one log-processing call.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::{MissingStartPolicy, ProcessConfig};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let config = ProcessConfig::new()
///     .with_top_words(3)
///     .with_missing_start(MissingStartPolicy::AssumeDate(date));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Number of top words extracted per minute bucket (default: 10).
    pub top_words: usize,

    /// Policy for messages preceding any start marker (default: reject).
    pub missing_start: MissingStartPolicy,

    /// Buffer size for file reading (default: 64KB).
    pub buffer_size: usize,

    /// Stop-word dictionary used by the token normalizer
    /// (default: built-in English list).
    #[serde(skip, default)]
    pub stop_words: StopWords,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            missing_start: MissingStartPolicy::default(),
            buffer_size: 64 * 1024, // 64KB
            stop_words: StopWords::english(),
        }
    }
}

impl ProcessConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of top words extracted per minute.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the missing-start-marker policy.
    #[must_use]
    pub fn with_missing_start(mut self, policy: MissingStartPolicy) -> Self {
        self.missing_start = policy;
        self
    }

    /// Sets the buffer size for file reading.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets the stop-word dictionary.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ProcessConfig::default();
        assert_eq!(config.top_words, 10);
        assert_eq!(config.missing_start, MissingStartPolicy::Reject);
        assert_eq!(config.buffer_size, 64 * 1024);
        assert!(config.stop_words.contains("the"));
    }

    #[test]
    fn test_config_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let config = ProcessConfig::new()
            .with_top_words(3)
            .with_missing_start(MissingStartPolicy::AssumeDate(date))
            .with_buffer_size(128 * 1024)
            .with_stop_words(StopWords::none());

        assert_eq!(config.top_words, 3);
        assert_eq!(config.missing_start, MissingStartPolicy::AssumeDate(date));
        assert_eq!(config.buffer_size, 128 * 1024);
        assert!(config.stop_words.is_empty());
    }

    #[test]
    fn test_missing_start_policy_default() {
        assert_eq!(MissingStartPolicy::default(), MissingStartPolicy::Reject);
    }

    #[test]
    fn test_config_serde_skips_stop_words() {
        let config = ProcessConfig::new().with_stop_words(StopWords::none());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("stop_words"));

        // Deserialized config falls back to the default dictionary
        let parsed: ProcessConfig = serde_json::from_str(&json).unwrap();
        assert!(parsed.stop_words.contains("the"));
    }
}
