//! Runtime configuration.
//!
//! Settings are layered, later layers overriding earlier ones:
//! 1. built-in defaults;
//! 2. a TOML file (`--config <PATH>`, else `uv.toml` in the working
//!    directory when present);
//! 3. `UV_*` environment variables (a `.env` file is loaded by the binary);
//! 4. command-line flags, applied by the binary.
//!
//! ```toml
//! feed_url = "https://uvdata.arpansa.gov.au/xml/uvvalues.xml"
//! timeout_secs = 20
//!
//! [log]
//! level = "info"
//! file = "uv.log"
//!
//! [time_zones]
//! "Mawson" = "Antarctica/Mawson"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::ingest::arpansa::FEED_URL;
use crate::logging::LogLevel;
use crate::stations::TimeZoneTable;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "uv.toml";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_FEED_URL: &str = "UV_FEED_URL";
pub const ENV_TIMEOUT_SECS: &str = "UV_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "UV_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "UV_LOG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid time zone '{zone}' configured for station '{station}'")]
    InvalidTimeZone { station: String, zone: String },

    #[error("invalid value '{value}' for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Configuration structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed_url: String,
    pub timeout_secs: u64,
    pub log: LogConfig,
    /// Station display name → IANA zone, merged over the built-in registry.
    pub time_zones: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    #[serde(deserialize_with = "deserialize_from_str")]
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log: LogConfig::default(),
            time_zones: BTreeMap::new(),
        }
    }
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(serde::de::Error::custom)
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Loads defaults, then the config file, then the process environment.
    ///
    /// An explicit `path` must exist; the default `uv.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Applies `UV_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_FEED_URL) {
            self.feed_url = url;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    var: ENV_TIMEOUT_SECS,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log.level = value.parse().map_err(|reason| ConfigError::InvalidEnv {
                var: ENV_LOG_LEVEL,
                value: value.clone(),
                reason,
            })?;
        }
        if let Some(file) = lookup(ENV_LOG_FILE) {
            self.log.file = Some(PathBuf::from(file));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the station time zone table: the built-in registry with the
    /// configured `time_zones` on top.
    pub fn time_zone_table(&self) -> Result<TimeZoneTable, ConfigError> {
        let overrides = self
            .time_zones
            .iter()
            .map(|(station, zone)| {
                zone.parse::<Tz>()
                    .map(|tz| (station.clone(), tz))
                    .map_err(|_| ConfigError::InvalidTimeZone {
                        station: station.clone(),
                        zone: zone.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TimeZoneTable::builtin().with_overrides(overrides))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
