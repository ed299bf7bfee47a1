//! Time-series formatting for the charting boundary.
//!
//! Converts a [`Timeline`] into three parallel sequences — epoch-millisecond
//! timestamps, message counts, and hover labels — sorted ascending by time.
//! This is the shape the external charting adapter consumes; nothing here
//! performs I/O or knows anything about rendering.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::timeline::Timeline;

/// Header line of a hover label.
pub const LABEL_HEADER: &str = "Top Words: <br>\n";

/// Separator between words inside a hover label.
pub const LABEL_SEPARATOR: &str = "<br> \n";

/// Aligned per-minute series for a charting adapter.
///
/// All three vectors have equal length and are sorted ascending by
/// timestamp. Building the series is a pure transformation: formatting the
/// same timeline twice yields identical output.
///
/// # Example
///
/// ```rust
/// use chatpulse::series::TimeSeries;
/// use chatpulse::timeline::Timeline;
///
/// let series = TimeSeries::from_timeline(&Timeline::new());
/// assert!(series.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Minute timestamps as epoch milliseconds (UTC).
    pub timestamps: Vec<i64>,
    /// Message counts per minute.
    pub counts: Vec<u64>,
    /// Hover labels listing each minute's top words.
    pub labels: Vec<String>,
}

impl TimeSeries {
    /// Builds the series from a timeline.
    ///
    /// The timeline is already ordered by construction; the keys are
    /// re-sorted here anyway so the output contract does not depend on the
    /// backing collection.
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let mut minutes: Vec<&NaiveDateTime> = timeline.keys().collect();
        minutes.sort_unstable();

        let mut series = Self {
            timestamps: Vec::with_capacity(minutes.len()),
            counts: Vec::with_capacity(minutes.len()),
            labels: Vec::with_capacity(minutes.len()),
        };

        for minute in minutes {
            let bucket = &timeline[minute];
            series.timestamps.push(epoch_millis(*minute));
            series.counts.push(bucket.count);
            series.labels.push(hover_label(&bucket.top_words));
        }

        series
    }

    /// Returns the number of minutes in the series.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the series holds no minutes.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Converts a minute timestamp to epoch milliseconds.
///
/// The log format carries no zone information, so the naive timestamp is
/// interpreted as UTC.
pub fn epoch_millis(minute: NaiveDateTime) -> i64 {
    minute.and_utc().timestamp_millis()
}

/// Formats a minute's top words into a hover label.
///
/// One word per line under a fixed header, using the `<br>` markup the
/// charting adapter expects. An empty word list yields just the header.
pub fn hover_label(words: &[String]) -> String {
    let mut label = String::from(LABEL_HEADER);
    label.push_str(&words.join(LABEL_SEPARATOR));
    label
}
