//! Command line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::logging::LogLevel;
use crate::model::{QueryOptions, SortField};

#[derive(Debug, Parser)]
#[command(
    name = "uv",
    version,
    about = "Shows the current UV index for various locations around Australia",
    long_about = concat!(
        "Shows the current UV index for various locations around Australia.\n",
        "Observations are sourced from ARPANSA.\n",
        "See disclaimer: https://www.arpansa.gov.au/our-services/monitoring/",
        "ultraviolet-radiation-monitoring/ultraviolet-radation-data-information#Disclaimer"
    )
)]
pub struct Cli {
    /// Comma-separated list of locations to display (accepts id and name)
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', action = ArgAction::Append)]
    pub locations: Vec<String>,

    /// Field to sort observations by: id, name, index, time or status
    #[arg(short, long, value_name = "FIELD", default_value = "name")]
    pub sort: SortField,

    /// Print observations in reverse order
    #[arg(short, long)]
    pub reverse: bool,

    /// Print one compact line per location, without a header
    #[arg(short, long)]
    pub quiet: bool,

    /// Read the feed from a saved file instead of fetching it
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Configuration file (defaults to ./uv.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level: debug, info, warn or error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Append logs to this file as well as stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// HTTP timeout for the feed request, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// The pipeline options selected on the command line.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            locations: self
                .locations
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect(),
            sort_field: self.sort,
            reverse: self.reverse,
            quiet: self.quiet,
        }
    }

    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        if let Some(file) = &self.log_file {
            config.log.file = Some(file.clone());
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = secs;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
