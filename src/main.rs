//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::path::Path;
use std::process;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Parser as ClapParser;

use chatpulse::ChatpulseError;
use chatpulse::cli::Args;
use chatpulse::config::{MissingStartPolicy, ProcessConfig};
use chatpulse::normalize::StopWords;
use chatpulse::output::{SeriesFormat, write_series};
use chatpulse::series::TimeSeries;
use chatpulse::timeline::LogProcessor;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatpulseError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let format: SeriesFormat = args.format.into();
    let output_path = adjust_output_extension(&args.output, format);

    // Print header
    println!("📈 chatpulse v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    println!("🔤 Top-N:   {}", args.top_words);

    // Build processing configuration
    let mut config = ProcessConfig::new().with_top_words(args.top_words);

    if let Some(ref date) = args.assume_date {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ChatpulseError::invalid_date(date.clone()))?;
        config = config.with_missing_start(MissingStartPolicy::AssumeDate(parsed));
        println!("📅 Date:    {} (assumed)", date);
    }

    if args.no_stop_words {
        config = config.with_stop_words(StopWords::none());
        println!("🔇 Stop-words disabled");
    }

    println!();

    // Step 1: Build the timeline
    println!("⏳ Processing log...");
    let process_start = Instant::now();
    let processor = LogProcessor::with_config(config);
    let timeline = processor.process(Path::new(&args.input))?;
    let process_time = process_start.elapsed();

    let message_count: u64 = timeline.values().map(|b| b.count).sum();
    let active_minutes = timeline.values().filter(|b| !b.is_empty()).count();
    println!(
        "   {} messages across {} minutes ({} active, {:.2}s)",
        message_count,
        timeline.len(),
        active_minutes,
        process_time.as_secs_f64()
    );

    // Step 2: Format the series
    println!("📊 Formatting series...");
    let series = TimeSeries::from_timeline(&timeline);

    // Step 3: Write output
    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    write_series(&series, &output_path, format)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", message_count);
    println!("   Minutes:   {} ({} active)", series.len(), active_minutes);
    if let Some((busiest, bucket)) = timeline.iter().max_by_key(|(_, b)| b.count) {
        if bucket.count > 0 {
            println!(
                "   Busiest:   {} ({} messages)",
                busiest.format("%Y-%m-%d %H:%M"),
                bucket.count
            );
        }
    }
    println!("   Total time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}

/// Adjusts output file extension based on format if using the default output.
fn adjust_output_extension(output: &str, format: SeriesFormat) -> String {
    if output != "chat_series.json" {
        return output.to_string();
    }
    format!("chat_series.{}", format.extension())
}
