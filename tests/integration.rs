//! Integration tests for the full processing pipeline with real files.

use chatpulse::config::ProcessConfig;
use chatpulse::normalize::StopWords;
use chatpulse::output::SeriesFormat;
use chatpulse::series::TimeSeries;
use chatpulse::timeline::{LogProcessor, Timeline};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

fn fixtures_dir() -> &'static str {
    "tests/fixtures"
}

fn ensure_fixtures() {
    INIT.call_once(|| {
        let dir = fixtures_dir();
        if !Path::new(dir).exists() {
            fs::create_dir_all(dir).unwrap();
        }

        // The reference session: two active minutes around a silent one
        let basic = "\
# Log started: 2024-01-01 10:00:00 +0000
[10:00:05] <alice> hello world hello
[10:00:45] <bob> world of code
[10:02:10] <alice> testing again
# Log closed: 2024-01-01 10:03:00 +0000
";
        fs::write(format!("{dir}/basic.log"), basic).unwrap();

        // A session crossing midnight
        let rollover = "\
# Log started: 2024-01-01 23:58:00 +0000
[23:58:30] <alice> still monday somewhere
[23:59:30] <bob> almost there
[00:00:15] <alice> happy new day
[00:01:45] <bob> good night
# Log closed: 2024-01-02 00:02:00 +0000
";
        fs::write(format!("{dir}/rollover.log"), rollover).unwrap();

        // Markers only, no messages
        let empty = "\
# Log started: 2024-01-01 10:00:00 +0000
# Log closed: 2024-01-01 10:03:00 +0000
";
        fs::write(format!("{dir}/empty.log"), empty).unwrap();

        // Busy stream with join/part noise between messages
        let noisy = "\
# Log started: 2024-06-15 20:00:00 +0000
[20:00:01] <alice> game game game
* bob joined the channel
[20:00:30] <bob> nice game
[20:00:59] <charlie> what game is this
-- stream title changed --
[20:03:00] <alice> new boss fight
# Log closed: 2024-06-15 20:04:00 +0000
";
        fs::write(format!("{dir}/noisy.log"), noisy).unwrap();
    });
}

fn processor(n_words: usize) -> LogProcessor {
    LogProcessor::with_config(
        ProcessConfig::new()
            .with_stop_words(StopWords::none())
            .with_top_words(n_words),
    )
}

fn minute(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn assert_contiguous(timeline: &Timeline) {
    let minutes: Vec<&NaiveDateTime> = timeline.keys().collect();
    for pair in minutes.windows(2) {
        let gap = *pair[1] - *pair[0];
        assert_eq!(gap.num_seconds(), 60, "gap between {} and {}", pair[0], pair[1]);
    }
}

// =============================================================================
// Reference scenario
// =============================================================================

#[test]
fn test_basic_session_timeline() {
    ensure_fixtures();

    let timeline = processor(2)
        .process(Path::new(&format!("{}/basic.log", fixtures_dir())))
        .unwrap();

    let minutes: Vec<NaiveDateTime> = timeline.keys().copied().collect();
    assert_eq!(
        minutes,
        vec![
            minute(2024, 1, 1, 10, 0),
            minute(2024, 1, 1, 10, 1),
            minute(2024, 1, 1, 10, 2),
        ]
    );

    let first = &timeline[&minutes[0]];
    assert_eq!(first.count, 2);
    assert_eq!(first.top_words.len(), 2);
    // "hello" appears twice; the runner-up is a frequency-1 word
    assert_eq!(first.top_words[0], "hello");

    let gap = &timeline[&minutes[1]];
    assert_eq!(gap.count, 0);
    assert!(gap.top_words.is_empty());

    let last = &timeline[&minutes[2]];
    assert_eq!(last.count, 1);
    assert_eq!(last.top_words, vec!["again", "testing"]);
}

#[test]
fn test_basic_session_series() {
    ensure_fixtures();

    let timeline = processor(2)
        .process(Path::new(&format!("{}/basic.log", fixtures_dir())))
        .unwrap();
    let series = TimeSeries::from_timeline(&timeline);

    assert_eq!(series.len(), 3);
    assert_eq!(series.counts, vec![2, 0, 1]);
    assert!(series.timestamps.windows(2).all(|w| w[0] < w[1]));
    assert!(series.labels[0].starts_with("Top Words: <br>\n"));
    assert!(series.labels[0].contains("hello"));
    // Gap minute: header only
    assert_eq!(series.labels[1], "Top Words: <br>\n");
}

// =============================================================================
// Midnight rollover
// =============================================================================

#[test]
fn test_rollover_session() {
    ensure_fixtures();

    let timeline = processor(10)
        .process(Path::new(&format!("{}/rollover.log", fixtures_dir())))
        .unwrap();

    let minutes: Vec<NaiveDateTime> = timeline.keys().copied().collect();
    assert_eq!(
        minutes,
        vec![
            minute(2024, 1, 1, 23, 58),
            minute(2024, 1, 1, 23, 59),
            minute(2024, 1, 2, 0, 0),
            minute(2024, 1, 2, 0, 1),
        ]
    );
    assert_contiguous(&timeline);

    // Every minute here had traffic
    assert!(timeline.values().all(|b| b.count == 1));
}

// =============================================================================
// Empty and noisy sessions
// =============================================================================

#[test]
fn test_empty_session() {
    ensure_fixtures();

    let timeline = processor(10)
        .process(Path::new(&format!("{}/empty.log", fixtures_dir())))
        .unwrap();
    assert!(timeline.is_empty());

    let series = TimeSeries::from_timeline(&timeline);
    assert!(series.is_empty());
}

#[test]
fn test_noisy_session_skips_non_messages() {
    ensure_fixtures();

    let timeline = processor(3)
        .process(Path::new(&format!("{}/noisy.log", fixtures_dir())))
        .unwrap();

    // 20:00 (3 messages), 20:01, 20:02 (gaps), 20:03 (1 message)
    assert_eq!(timeline.len(), 4);
    assert_contiguous(&timeline);

    let first = &timeline[&minute(2024, 6, 15, 20, 0)];
    assert_eq!(first.count, 3);
    // "game" appears 5 times across the minute
    assert_eq!(first.top_words[0], "game");

    assert_eq!(timeline[&minute(2024, 6, 15, 20, 1)].count, 0);
    assert_eq!(timeline[&minute(2024, 6, 15, 20, 2)].count, 0);
    assert_eq!(timeline[&minute(2024, 6, 15, 20, 3)].count, 1);
}

// =============================================================================
// Gap-fill completeness over a larger generated session
// =============================================================================

#[test]
fn test_generated_session_has_no_gaps() {
    let mut lines = vec!["# Log started: 2024-01-01 08:00:00 +0000".to_string()];
    // Messages at scattered minutes with multi-minute silences
    for (minute_offset, word) in [(0u32, "alpha"), (7, "beta"), (8, "gamma"), (23, "delta")] {
        let h = 8 + minute_offset / 60;
        let m = minute_offset % 60;
        lines.push(format!("[{h:02}:{m:02}:30] <alice> {word}"));
    }
    let log = lines.join("\n");

    let timeline = processor(10).process_str(&log).unwrap();

    // One entry per minute from 08:00 through 08:23 inclusive
    assert_eq!(timeline.len(), 24);
    assert_contiguous(&timeline);
    assert_eq!(
        timeline.values().filter(|b| b.count > 0).count(),
        4,
        "only the four scattered minutes are active"
    );
}

// =============================================================================
// Output round-trips
// =============================================================================

#[cfg(feature = "json-output")]
#[test]
fn test_json_output_round_trip() {
    ensure_fixtures();

    let timeline = processor(2)
        .process(Path::new(&format!("{}/basic.log", fixtures_dir())))
        .unwrap();
    let series = TimeSeries::from_timeline(&timeline);

    let temp = tempfile::NamedTempFile::new().unwrap();
    let path = temp.path().to_str().unwrap();
    chatpulse::output::write_series(&series, path, SeriesFormat::Json).unwrap();

    let content = fs::read_to_string(path).unwrap();
    let parsed: TimeSeries = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, series);
}

#[cfg(feature = "csv-output")]
#[test]
fn test_csv_output_layout() {
    ensure_fixtures();

    let timeline = processor(2)
        .process(Path::new(&format!("{}/basic.log", fixtures_dir())))
        .unwrap();
    let series = TimeSeries::from_timeline(&timeline);

    let temp = tempfile::NamedTempFile::new().unwrap();
    let path = temp.path().to_str().unwrap();
    chatpulse::output::write_series(&series, path, SeriesFormat::Csv).unwrap();

    let content = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Timestamp;Count;TopWords");
    assert_eq!(lines.len(), 4); // header + 3 minutes
    assert!(lines[1].contains(";2;"));
    assert!(lines[1].contains("hello"));
}

// =============================================================================
// Concurrent processing shares nothing mutable
// =============================================================================

#[test]
fn test_parallel_calls_are_independent() {
    ensure_fixtures();

    let processor = std::sync::Arc::new(processor(2));
    let path = format!("{}/basic.log", fixtures_dir());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let processor = std::sync::Arc::clone(&processor);
            let path = path.clone();
            std::thread::spawn(move || processor.process(Path::new(&path)).unwrap())
        })
        .collect();

    let results: Vec<Timeline> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for timeline in &results[1..] {
        assert_eq!(timeline, &results[0]);
    }
}
