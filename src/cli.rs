//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! The CLI is a thin file-in/series-out surface over the library; upload
//! handling, templating, and chart rendering live in external collaborators.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Turn a chat-client log into a per-minute activity time series
/// with top-word hover labels.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse stream.log
    chatpulse stream.log -o series.json
    chatpulse stream.log --format csv -o series.csv
    chatpulse stream.log --top-words 5
    chatpulse undated.log --assume-date 2024-01-01")]
pub struct Args {
    /// Path to input log file
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "chat_series.json")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Number of top words per minute
    #[arg(short = 'n', long, value_name = "N", default_value_t = 10)]
    pub top_words: usize,

    /// Date context for logs without a session-start marker (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub assume_date: Option<String>,

    /// Disable the built-in English stop-word list
    #[arg(long)]
    pub no_stop_words: bool,
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatpulse::cli::OutputFormat;
///
/// let format = OutputFormat::Csv;
/// println!("Extension: {}", format.extension()); // "csv"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON object of parallel arrays (default)
    #[default]
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::output::SeriesFormat {
    fn from(format: OutputFormat) -> crate::output::SeriesFormat {
        match format {
            OutputFormat::Json => crate::output::SeriesFormat::Json,
            OutputFormat::Csv => crate::output::SeriesFormat::Csv,
        }
    }
}
