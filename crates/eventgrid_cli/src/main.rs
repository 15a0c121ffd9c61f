//! Event feed command-line entry point.
//!
//! # Responsibility
//! - Read a JSON array of raw events and print those within a day range.
//! - Keep all event rules inside `eventgrid_core`.

use anyhow::{Context, Result};
use clap::Parser;
use eventgrid_core::{default_log_level, init_logging, DayRange, EventFeed, FieldMap, Zone};
use std::io::Read;
use std::path::PathBuf;

const LOG_DIR_ENV: &str = "EVENTGRID_LOG_DIR";

/// Print the events of a JSON feed that fall within `[start, end)`.
#[derive(Parser, Debug)]
#[command(name = "eventgrid", version)]
struct Cli {
    /// First day of the range (inclusive), `YYYY-MM-DD` or a date-time.
    #[arg(long)]
    start: String,

    /// Day after the last day of the range (exclusive).
    #[arg(long)]
    end: String,

    /// Zone for timed events without their own offset, e.g. `+08:00` or `UTC`.
    #[arg(long)]
    tz: Option<String>,

    /// Log level used when `EVENTGRID_LOG_DIR` is set.
    #[arg(long)]
    log_level: Option<String>,

    /// JSON file holding an array of event objects; stdin when omitted.
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir).map_err(anyhow::Error::msg)?;
    }

    let zone = cli
        .tz
        .as_deref()
        .map(str::parse::<Zone>)
        .transpose()
        .context("invalid --tz")?;
    let range = DayRange::parse(&cli.start, &cli.end).context("invalid day range")?;

    let input = read_input(cli.file.as_ref())?;
    let raw: Vec<FieldMap> =
        serde_json::from_str(&input).context("input must be a JSON array of event objects")?;

    let kept = EventFeed::new(zone).events_within(&raw, &range)?;
    println!("{}", serde_json::to_string_pretty(&kept)?);
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
