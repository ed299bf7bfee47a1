//! Line classification for chat-client logs.
//!
//! A log file contains three kinds of lines:
//! - session-start markers: `# Log started: 2024-01-01 10:00:00 +0000`
//! - session-end markers: `# Log closed: 2024-01-01 10:03:00 +0000`
//! - chat messages: `[10:00:05] <alice> hello world`
//!
//! Anything else (join/part notices, blank lines) is ignored by the
//! timeline builder. The predicates here are pure functions over a single
//! line with no side effects.

use chrono::NaiveDate;

/// Literal prefix of a session-start marker line.
pub const START_PREFIX: &str = "# Log started: ";

/// Literal prefix of a session-end marker line.
pub const END_PREFIX: &str = "# Log closed: ";

/// Returns `true` iff the line is a session-start marker.
pub fn is_start(line: &str) -> bool {
    line.starts_with(START_PREFIX)
}

/// Returns `true` iff the line is a session-end marker.
pub fn is_end(line: &str) -> bool {
    line.starts_with(END_PREFIX)
}

/// Returns `true` iff the line is a chat message.
///
/// A line is deemed a message when it has more than two whitespace-separated
/// fields and the second field is a username enclosed in `<` and `>`.
pub fn is_message(line: &str) -> bool {
    let mut fields = line.split_whitespace();
    let (Some(_), Some(username), Some(_)) = (fields.next(), fields.next(), fields.next()) else {
        return false;
    };
    username.starts_with('<') && username.ends_with('>')
}

/// Extracts the calendar date embedded in a session-start marker.
///
/// The marker carries a full timestamp (`2024-01-01 10:00:00 +0000`), but
/// only the leading `YYYY-MM-DD` date is needed: it seeds the date context
/// for subsequent messages, which carry a time of day only. Trailing time
/// and zone-offset fields are tolerated and ignored.
///
/// Returns `None` if the line is not a start marker or the date is
/// unreadable.
pub fn parse_marker_date(line: &str) -> Option<NaiveDate> {
    let rest = line.strip_prefix(START_PREFIX)?;
    let date_token = rest.split_whitespace().next()?;
    NaiveDate::parse_from_str(date_token, "%Y-%m-%d").ok()
}
