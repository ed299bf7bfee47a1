//! # Chatpulse
//!
//! A Rust library for turning chat-client log files into per-minute activity
//! time series with top-word hover labels, ready for a charting adapter.
//!
//! ## Overview
//!
//! A chat log is a plain-text file of session markers and messages:
//!
//! ```text
//! # Log started: 2024-01-01 10:00:00 +0000
//! [10:00:05] <alice> hello world hello
//! [10:00:45] <bob> world of code
//! [10:02:10] <alice> testing again
//! # Log closed: 2024-01-01 10:03:00 +0000
//! ```
//!
//! Message timestamps carry only a time of day; the calendar date comes from
//! the start marker and rolls over at midnight. Chatpulse streams the file,
//! buckets messages into whole minutes, counts normalized words (lowercased,
//! punctuation stripped, stop-words removed), backfills empty minutes so the
//! series has no gaps, and emits three aligned sequences — timestamps,
//! counts, labels — for an external charting adapter.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatpulse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let processor = LogProcessor::new();
//!     let timeline = processor.process("stream.log".as_ref())?;
//!
//!     let series = TimeSeries::from_timeline(&timeline);
//!     write_series(&series, "series.json", SeriesFormat::Json)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`classify`] — line classification (markers vs. messages)
//! - [`message`] — message-line parsing ([`ParsedMessage`](message::ParsedMessage))
//! - [`normalize`] — token normalization and [`StopWords`](normalize::StopWords)
//! - [`counter`] — [`WordCounter`](counter::WordCounter) multisets and top-N selection
//! - [`timeline`] — [`LogProcessor`](timeline::LogProcessor), the session state
//!   machine, minute bucketing and gap filling
//! - [`series`] — [`TimeSeries`](series::TimeSeries) formatting for the charting boundary
//! - [`output`] — series writers ([`write_series`](output::write_series), JSON/CSV)
//! - [`config`] — [`ProcessConfig`](config::ProcessConfig) and policies
//! - [`cli`] — CLI types (with the `cli` feature)
//! - [`error`] — unified error types ([`ChatpulseError`], [`Result`])
//! - [`prelude`] — convenient re-exports
//!
//! ## Scope
//!
//! One session per file: an end marker stops processing entirely. Upload
//! handling, file validation, and chart rendering are external collaborators
//! and deliberately out of scope.

#[cfg(feature = "cli")]
pub mod cli;
pub mod classify;
pub mod config;
pub mod counter;
pub mod error;
pub mod message;
pub mod normalize;
pub mod output;
pub mod series;
pub mod timeline;

// Re-export the main types at the crate root for convenience
pub use error::{ChatpulseError, Result};
pub use timeline::{LogProcessor, Timeline, process_file};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatpulseError, Result};

    // Processing
    pub use crate::config::{MissingStartPolicy, ProcessConfig};
    pub use crate::timeline::{LogProcessor, MinuteBucket, Timeline, process_file};

    // Normalization
    pub use crate::counter::{WordCounter, merge_counters};
    pub use crate::normalize::StopWords;

    // Formatting and output
    pub use crate::output::{SeriesFormat, write_series};
    pub use crate::series::TimeSeries;
}
