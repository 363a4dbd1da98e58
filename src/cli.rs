//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - output format options
//! - [`init_tracing`] - stderr log subscriber for the binary
//!
//! Dimensions, metrics and locales are parsed through their own `FromStr`
//! impls, so the CLI accepts exactly the keys the library does.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AnalyzerConfig;
use crate::dimension::{Dimension, Metric};
use crate::error::{Result, WhatstatError};
use crate::locale::Locale;

/// Activity statistics for WhatsApp chat exports.
///
/// Parses a `.txt` export, enriches every message with calendar fields and
/// prints one metric pivoted over one or two dimensions.
#[derive(Parser, Debug, Clone)]
#[command(name = "whatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    whatstat chat.txt
    whatstat chat.txt -x dayofweek -y wpm --locale es
    whatstat chat.txt -x hour --hue year -f json -o hours.json
    whatstat chat.txt -x month -y words --hue author
    whatstat chat.txt --records records.csv --alias '+54 9 11 5555-0000=Eric'

DIMENSIONS:
    year month day hour dayofweek weekofyear quarter year_month year_day
    year_hour year_weekofyear year_dayofweek year_quarter author

METRICS:
    msg words wpm starting media")]
pub struct Args {
    /// Path to the WhatsApp text export
    pub input: PathBuf,

    /// Dimension on the x axis (table columns)
    #[arg(short = 'x', long = "x", value_name = "DIM", default_value = "year")]
    pub x: Dimension,

    /// Metric to aggregate
    #[arg(short = 'y', long = "y", value_name = "METRIC", default_value = "msg")]
    pub y: Metric,

    /// Optional dimension splitting the table into rows
    #[arg(long, value_name = "DIM")]
    pub hue: Option<Dimension>,

    /// Language of axis labels
    #[arg(short, long, default_value = "en")]
    pub locale: Locale,

    /// Output format of the pivot table
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Write the pivot table here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Also write the enriched record table; format follows the extension
    #[arg(long, value_name = "FILE")]
    pub records: Option<String>,

    /// JSON file with analyzer settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rename an author, `RAW=NAME` (repeatable)
    #[arg(long = "alias", value_name = "RAW=NAME", value_parser = parse_alias)]
    pub aliases: Vec<(String, String)>,

    /// Seed for the date-format sample
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Append lines without a date header to the previous message
    #[arg(long)]
    pub join_orphans: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the analyzer settings: the `--config` file (or defaults),
    /// then command-line overrides.
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                serde_json::from_str(&content).map_err(|e| {
                    WhatstatError::invalid_format("config", format!("{}: {e}", path.display()))
                })?
            }
            None => AnalyzerConfig::default(),
        };

        for (raw, name) in &self.aliases {
            config = config.with_alias(raw.as_str(), name.as_str());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.join_orphans {
            config = config.with_join_orphan_lines(true);
        }
        Ok(config)
    }
}

fn parse_alias(s: &str) -> std::result::Result<(String, String), String> {
    match s.rsplit_once('=') {
        Some((raw, name)) if !raw.is_empty() && !name.is_empty() => {
            Ok((raw.to_string(), name.to_string()))
        }
        _ => Err(format!("expected RAW=NAME, got '{s}'")),
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// Pretty-printed JSON
    Json,

    /// One JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the level comes from the `-v` count: `warn`, then
/// `info`, then `debug`.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // a second init (tests, embedding) keeps the first subscriber
    let _ = Registry::default().with(env_filter).with(fmt_layer).try_init();
}
