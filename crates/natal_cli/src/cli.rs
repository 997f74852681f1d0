//! Command-line arguments.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use clap::{Args, Parser, Subcommand};
use natal_config::DEFAULT_CONFIG_FILE;
use natal_rs::{BirthInput, Locale};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "natal", version, about = "Natal chart calculator")]
pub struct Cli {
    /// Configuration file (default: ./natal.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute a natal chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute a chart and its personality and career interpretation
    Analyze {
        #[command(flatten)]
        birth: BirthArgs,
        /// Interpretation language: en or vi
        #[arg(long)]
        locale: Option<Locale>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Zodiac position of an ecliptic longitude
    Zodiac {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a configuration file with default settings
    InitConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Birth date, local time and place.
#[derive(Debug, Clone, Args)]
pub struct BirthArgs {
    /// Local date, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub date: NaiveDate,
    /// Local clock time, HH:MM (24-hour)
    #[arg(long, value_parser = parse_time)]
    pub time: NaiveTime,
    /// Hours east of UTC, e.g. 7 or -3.5
    #[arg(long, allow_negative_numbers = true)]
    pub utc_offset: f64,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
    #[arg(long)]
    pub name: Option<String>,
    /// Place name, display only
    #[arg(long)]
    pub location: Option<String>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

impl BirthArgs {
    pub fn to_input(&self) -> BirthInput {
        let mut input = BirthInput::new(
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.time.hour(),
            self.time.minute(),
            self.utc_offset,
            self.lat,
            self.lon,
        );
        if let Some(name) = &self.name {
            input = input.with_name(name);
        }
        if let Some(location) = &self.location {
            input = input.with_location(location);
        }
        input
    }
}

impl Cli {
    /// Flags win over the config file's `[log] level`.
    pub fn log_level(&self, configured: LevelFilter) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => configured,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
