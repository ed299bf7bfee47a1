//! Session timeline construction.
//!
//! This is the orchestrator: it streams a log file line by line, tracks the
//! session state and the active calendar date, buckets messages into whole
//! minutes, and backfills empty minutes so the resulting timeline has one
//! entry per minute with no gaps.
//!
//! # Session model
//!
//! A file holds at most one session, delimited by start/end marker lines.
//! The start marker seeds the calendar date; message timestamps carry only a
//! time of day. When a message's time of day is lower than its predecessor's
//! the active date advances by one day (midnight rollover). An end marker
//! stops processing entirely; anything after it is ignored.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::ProcessConfig;
//! use chatpulse::normalize::StopWords;
//! use chatpulse::timeline::LogProcessor;
//!
//! let log = "\
//! ## Log started: 2024-01-01 10:00:00 +0000
//! [10:00:05] <alice> hello world hello
//! [10:02:10] <bob> testing again
//! ## Log closed: 2024-01-01 10:03:00 +0000
//! ";
//!
//! let processor = LogProcessor::with_config(
//!     ProcessConfig::new().with_stop_words(StopWords::none()),
//! );
//! let timeline = processor.process_str(log)?;
//!
//! // 10:00, 10:01 (gap-filled), 10:02
//! assert_eq!(timeline.len(), 3);
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::classify::{is_end, is_message, is_start, parse_marker_date};
use crate::config::{MissingStartPolicy, ProcessConfig};
use crate::counter::WordCounter;
use crate::error::{ChatpulseError, Result};
use crate::message::parse_message;

/// A frozen minute of chat activity.
///
/// Only closed buckets live in the timeline; the minute currently being
/// aggregated is an [`OpenBucket`] private to the builder, so the open/closed
/// lifecycle is enforced by the types rather than by convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteBucket {
    /// Number of messages in this minute.
    pub count: u64,
    /// Most frequent words, descending; ties lexicographic ascending.
    pub top_words: Vec<String>,
}

impl MinuteBucket {
    /// A zero-activity bucket, used for gap filling.
    pub fn empty() -> Self {
        Self {
            count: 0,
            top_words: Vec::new(),
        }
    }

    /// Returns `true` if no messages landed in this minute.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Ordered mapping of minute timestamps to frozen buckets.
///
/// Sorted and duplicate-free by construction; gap filling guarantees one
/// entry per whole minute between the first and last message, inclusive.
pub type Timeline = BTreeMap<NaiveDateTime, MinuteBucket>;

/// Session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    /// No start marker seen yet; messages have no date context.
    AwaitingSession,
    /// Inside a session; `active_date` anchors message times of day.
    InSession { active_date: NaiveDate },
    /// End marker seen; all further lines are ignored.
    Closed,
}

/// The minute currently being aggregated.
///
/// Distinct from [`MinuteBucket`]: an open bucket still carries its full
/// word counter and is mutated as messages arrive; freezing it extracts the
/// top words and discards the counter.
#[derive(Debug)]
struct OpenBucket {
    minute: NaiveDateTime,
    count: u64,
    words: WordCounter,
}

impl OpenBucket {
    fn new(minute: NaiveDateTime) -> Self {
        Self {
            minute,
            count: 0,
            words: WordCounter::new(),
        }
    }

    fn freeze(self, top_words: usize) -> (NaiveDateTime, MinuteBucket) {
        (
            self.minute,
            MinuteBucket {
                count: self.count,
                top_words: self.words.top_words(top_words),
            },
        )
    }
}

/// Processes chat-log files into per-minute activity timelines.
///
/// Holds only read-only configuration, so one processor can serve many
/// files; concurrent calls share nothing mutable.
///
/// # Example
///
/// ```rust,no_run
/// use chatpulse::timeline::LogProcessor;
///
/// let processor = LogProcessor::new();
/// let timeline = processor.process("stream.log".as_ref())?;
/// # Ok::<(), chatpulse::ChatpulseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogProcessor {
    config: ProcessConfig,
}

impl LogProcessor {
    /// Creates a processor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a processor with custom configuration.
    pub fn with_config(config: ProcessConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// Processes a log file into a timeline.
    ///
    /// The file is streamed line by line; only the per-minute counters and
    /// the timeline accumulate in memory.
    ///
    /// # Errors
    ///
    /// - [`ChatpulseError::Io`] if the file cannot be opened or read
    /// - [`ChatpulseError::Parse`] on the first malformed message line
    /// - [`ChatpulseError::MissingSessionStart`] per the configured policy
    pub fn process(&self, path: &Path) -> Result<Timeline> {
        let file = File::open(path)?;
        self.process_reader(BufReader::with_capacity(self.config.buffer_size, file))
    }

    /// Processes log content already in memory.
    pub fn process_str(&self, content: &str) -> Result<Timeline> {
        self.process_reader(Cursor::new(content))
    }

    /// Processes log lines from any buffered reader.
    pub fn process_reader<R: BufRead>(&self, reader: R) -> Result<Timeline> {
        let mut builder = TimelineBuilder::new(&self.config);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if !builder.push_line(&line, index + 1)? {
                break;
            }
        }

        Ok(builder.finish())
    }
}

/// Processes a log file with default configuration.
///
/// Convenience wrapper over [`LogProcessor::process`].
pub fn process_file(path: impl AsRef<Path>) -> Result<Timeline> {
    LogProcessor::new().process(path.as_ref())
}

/// Incremental timeline builder consumed by [`LogProcessor`].
struct TimelineBuilder<'a> {
    config: &'a ProcessConfig,
    state: SessionState,
    previous_time: Option<NaiveTime>,
    open: Option<OpenBucket>,
    timeline: Timeline,
}

impl<'a> TimelineBuilder<'a> {
    fn new(config: &'a ProcessConfig) -> Self {
        Self {
            config,
            state: SessionState::AwaitingSession,
            previous_time: None,
            open: None,
            timeline: Timeline::new(),
        }
    }

    /// Feeds one line; returns `false` once the session has closed.
    fn push_line(&mut self, line: &str, line_number: usize) -> Result<bool> {
        if is_end(line) {
            self.state = SessionState::Closed;
            return Ok(false);
        }

        if is_start(line) {
            // The first marker is authoritative; later start markers inside
            // an open session are ignored.
            if self.state == SessionState::AwaitingSession {
                let date = parse_marker_date(line).ok_or_else(|| {
                    ChatpulseError::invalid_format(
                        "session-start marker",
                        format!("no YYYY-MM-DD date at line {line_number}: {line:?}"),
                    )
                })?;
                self.state = SessionState::InSession { active_date: date };
            }
            return Ok(true);
        }

        if is_message(line) {
            self.push_message(line, line_number)?;
        }

        Ok(true)
    }

    fn push_message(&mut self, line: &str, line_number: usize) -> Result<()> {
        let active_date = match self.state {
            SessionState::InSession { active_date } => active_date,
            SessionState::AwaitingSession => match self.config.missing_start {
                MissingStartPolicy::Reject => {
                    return Err(ChatpulseError::missing_session_start(line_number));
                }
                MissingStartPolicy::AssumeDate(date) => {
                    self.state = SessionState::InSession { active_date: date };
                    date
                }
            },
            SessionState::Closed => return Ok(()),
        };

        let message = parse_message(line, line_number, &self.config.stop_words)?;

        // Midnight rollover: a drop in time of day means the clock wrapped.
        // The date must advance before the minute is computed, or the new
        // timestamp would appear to precede the previous one.
        let date = match self.previous_time {
            Some(previous) if message.time_of_day < previous => {
                let next = active_date + Duration::days(1);
                self.state = SessionState::InSession { active_date: next };
                next
            }
            _ => active_date,
        };
        self.previous_time = Some(message.time_of_day);

        let minute = minute_of(date, message.time_of_day);

        match &mut self.open {
            Some(bucket) if bucket.minute == minute => {
                bucket.count += 1;
                bucket.words.merge(message.words);
            }
            _ => {
                if let Some(previous) = self.open.take() {
                    self.close_and_fill_gap(previous, minute);
                }
                let mut bucket = OpenBucket::new(minute);
                bucket.count = 1;
                bucket.words = message.words;
                self.open = Some(bucket);
            }
        }

        Ok(())
    }

    /// Freezes `previous` and backfills every whole minute strictly between
    /// it and `next` with zero-activity buckets.
    fn close_and_fill_gap(&mut self, previous: OpenBucket, next: NaiveDateTime) {
        let closed_minute = previous.minute;
        let (minute, bucket) = previous.freeze(self.config.top_words);
        self.timeline.insert(minute, bucket);

        let mut gap = closed_minute + Duration::minutes(1);
        while gap < next {
            self.timeline.insert(gap, MinuteBucket::empty());
            gap += Duration::minutes(1);
        }
    }

    /// Freezes the last open minute and returns the finished timeline.
    ///
    /// The per-message loop only closes a minute when a later minute starts,
    /// so the final bucket must be frozen here.
    fn finish(mut self) -> Timeline {
        if let Some(open) = self.open.take() {
            let (minute, bucket) = open.freeze(self.config.top_words);
            self.timeline.insert(minute, bucket);
        }
        self.timeline
    }
}

/// Combines a calendar date with a time of day, rounded down to the minute.
fn minute_of(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_hms_opt(time.hour(), time.minute(), 0)
        .expect("hour and minute taken from a valid time")
}
