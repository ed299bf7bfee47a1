//! Output writers for formatted series.
//!
//! The charting adapter is an external collaborator; these writers persist
//! the three aligned sequences in formats it (or anything else) can pick up.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatpulse::Result<()> {
//! use chatpulse::output::{SeriesFormat, write_series};
//! use chatpulse::series::TimeSeries;
//!
//! let series = TimeSeries::default();
//! write_series(&series, "series.json", SeriesFormat::Json)?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatpulseError;
use crate::series::TimeSeries;

/// Output format for a formatted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SeriesFormat {
    /// JSON object with `timestamps`, `counts`, and `labels` arrays (default)
    #[default]
    Json,

    /// CSV with semicolon delimiter, one row per minute
    Csv,
}

impl SeriesFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            SeriesFormat::Json => "json",
            SeriesFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatpulseError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
        match ext.as_str() {
            "json" => Ok(SeriesFormat::Json),
            "csv" => Ok(SeriesFormat::Csv),
            _ => Err(ChatpulseError::invalid_format(
                "output path",
                format!("unknown file extension: '.{ext}'. Expected one of: json, csv"),
            )),
        }
    }
}

impl std::fmt::Display for SeriesFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesFormat::Json => write!(f, "JSON"),
            SeriesFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for SeriesFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(SeriesFormat::Json),
            "csv" => Ok(SeriesFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                SeriesFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a series to a file in the specified format.
#[allow(unused_variables)]
pub fn write_series(
    series: &TimeSeries,
    path: &str,
    format: SeriesFormat,
) -> Result<(), ChatpulseError> {
    match format {
        #[cfg(feature = "json-output")]
        SeriesFormat::Json => write_json(series, path),
        #[cfg(feature = "csv-output")]
        SeriesFormat::Csv => write_csv(series, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatpulseError::invalid_format(
            "output",
            format!(
                "format {format:?} requires the '{}' feature to be enabled",
                match format {
                    SeriesFormat::Json => "json-output",
                    SeriesFormat::Csv => "csv-output",
                }
            ),
        )),
    }
}

/// Writes a series to a pretty-printed JSON file.
///
/// # Format
/// ```json
/// {
///   "timestamps": [1704103200000],
///   "counts": [2],
///   "labels": ["Top Words: <br>\nhello"]
/// }
/// ```
#[cfg(feature = "json-output")]
pub fn write_json(series: &TimeSeries, path: &str) -> Result<(), ChatpulseError> {
    use std::io::Write;

    let json = to_json(series)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a series to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a `String` instead of writing
/// to a file.
#[cfg(feature = "json-output")]
pub fn to_json(series: &TimeSeries) -> Result<String, ChatpulseError> {
    Ok(serde_json::to_string_pretty(series)?)
}

/// Writes a series to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Count`, `TopWords`
/// - Words within `TopWords` are comma-joined; label markup is not carried
///   over
#[cfg(feature = "csv-output")]
pub fn write_csv(series: &TimeSeries, path: &str) -> Result<(), ChatpulseError> {
    let file = std::fs::File::create(path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_csv_records(series, &mut writer)?;
    Ok(())
}

/// Converts a series to a CSV string.
#[cfg(feature = "csv-output")]
pub fn to_csv(series: &TimeSeries) -> Result<String, ChatpulseError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_csv_records(series, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatpulseError::invalid_format("CSV output", e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| ChatpulseError::invalid_format("CSV output", e.to_string()))
}

#[cfg(feature = "csv-output")]
fn write_csv_records<W: std::io::Write>(
    series: &TimeSeries,
    writer: &mut csv::Writer<W>,
) -> Result<(), ChatpulseError> {
    writer.write_record(["Timestamp", "Count", "TopWords"])?;

    for i in 0..series.len() {
        let words = series.labels[i]
            .strip_prefix(crate::series::LABEL_HEADER)
            .unwrap_or(&series.labels[i])
            .split(crate::series::LABEL_SEPARATOR)
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        writer.write_record([
            series.timestamps[i].to_string(),
            series.counts[i].to_string(),
            words,
        ])?;
    }

    writer.flush().map_err(ChatpulseError::from)?;
    Ok(())
}
