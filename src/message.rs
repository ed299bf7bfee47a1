//! Chat-message line parsing.
//!
//! A message line looks like:
//!
//! ```text
//! [10:00:05] <alice> hello world hello
//! ```
//!
//! The timestamp carries only a time of day; the calendar date comes from
//! the session-start marker and is tracked by the timeline builder.

use std::sync::OnceLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::counter::WordCounter;
use crate::error::{ChatpulseError, Result};
use crate::normalize::{StopWords, normalize};

/// Pattern for a message line: `[HH:MM:SS] <username> body`.
const MESSAGE_PATTERN: &str = r"^\[(\d{2}:\d{2}:\d{2})\]\s+<([^>]+)>\s?(.*)$";

/// chrono format for the time-of-day token (brackets enforced by the pattern).
const TIME_FORMAT: &str = "%H:%M:%S";

fn message_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MESSAGE_PATTERN).expect("message pattern is valid"))
}

/// A single parsed chat message.
///
/// Ephemeral: produced per message line and consumed immediately by the
/// timeline builder. The username is parsed but not aggregated; it is kept
/// for embedders that want per-user statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    /// Time of day the message was sent (no date).
    pub time_of_day: NaiveTime,
    /// Username, with the `<` `>` delimiters stripped.
    pub username: String,
    /// Normalized word-frequency multiset of the message body.
    pub words: WordCounter,
}

/// Parses a line already classified as a chat message.
///
/// The first token must match `[HH:MM:SS]` (24-hour clock, zero-padded);
/// the second token is the `<username>`; everything after it is the message
/// body, which is normalized against `stop_words`.
///
/// # Errors
///
/// Returns [`ChatpulseError::Parse`] carrying `line_number` and the verbatim
/// line when the timestamp or username field cannot be parsed. This is fatal
/// for the whole file-processing call.
pub fn parse_message(
    line: &str,
    line_number: usize,
    stop_words: &StopWords,
) -> Result<ParsedMessage> {
    let trimmed = line.trim_end();

    let caps = message_regex().captures(trimmed).ok_or_else(|| {
        ChatpulseError::parse_line(
            line_number,
            trimmed,
            "expected `[HH:MM:SS] <username> message`",
        )
    })?;

    let time_token = caps.get(1).map_or("", |m| m.as_str());
    let time_of_day = NaiveTime::parse_from_str(time_token, TIME_FORMAT).map_err(|e| {
        ChatpulseError::parse_line(line_number, trimmed, format!("invalid timestamp: {e}"))
    })?;

    let username = caps.get(2).map_or("", |m| m.as_str()).to_string();
    let body = caps.get(3).map_or("", |m| m.as_str());

    Ok(ParsedMessage {
        time_of_day,
        username,
        words: normalize(body, stop_words),
    })
}
