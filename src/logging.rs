//! Structured logging for the UV monitor.
//!
//! Events are emitted with `tracing` throughout the library and collected
//! by a `tracing-subscriber` registry installed once by the binary. Logs
//! always go to stderr so stdout carries only the station listing; an
//! optional log file receives the same events.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt as fmt_layer, layer::SubscriberExt};

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warning => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!(
                "invalid log level '{}' (expected debug, info, warn or error)",
                other
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Subscriber setup
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenFile { path: PathBuf, source: io::Error },

    #[error("a global log subscriber is already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `min_level` filters this crate's
/// events. When `log_file` is given, events are also appended to it.
///
/// # Errors
/// - `LoggingError::OpenFile`: `log_file` cannot be opened for appending.
/// - `LoggingError::AlreadyInstalled`: a global subscriber exists, so
///   neither stderr nor `log_file` would receive this crate's events.
pub fn init_logger(min_level: LogLevel, log_file: Option<&Path>) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("uvmon={}", min_level)));

    let console = fmt_layer::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    let file = match log_file {
        Some(path) => {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            Some(
                fmt_layer::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(handle)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;

    tracing::debug!(level = %min_level, "logging initialised");
    Ok(())
}

// ---------------------------------------------------------------------------
// Summary Logging
// ---------------------------------------------------------------------------

/// Per-run counts of the fallbacks applied while normalizing.
///
/// A station is `degraded` when its index or its timestamp fell back. A
/// missing time zone alone does not degrade it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationSummary {
    pub total: usize,
    pub degraded: usize,
    pub index_fallbacks: usize,
    pub time_fallbacks: usize,
    pub unzoned: usize,
}

impl NormalizationSummary {
    pub fn record(&mut self, index_fallback: bool, time_fallback: bool, zone_found: bool) {
        self.total += 1;
        self.degraded += usize::from(index_fallback || time_fallback);
        self.index_fallbacks += usize::from(index_fallback);
        self.time_fallbacks += usize::from(time_fallback);
        self.unzoned += usize::from(!zone_found);
    }

    /// `debug` when nothing degraded, `warn` when every station did,
    /// `info` otherwise.
    pub fn level(&self) -> LogLevel {
        if self.degraded == 0 {
            LogLevel::Debug
        } else if self.degraded == self.total {
            LogLevel::Warning
        } else {
            LogLevel::Info
        }
    }
}

/// Logs one line summarising the field fallbacks applied in a run.
pub fn log_normalization_summary(summary: &NormalizationSummary) {
    let message = format!(
        "Normalized {} stations ({} degraded): {} unusable indexes, {} unusable timestamps, \
         {} without time zone",
        summary.total,
        summary.degraded,
        summary.index_fallbacks,
        summary.time_fallbacks,
        summary.unzoned
    );

    match summary.level() {
        LogLevel::Debug => tracing::debug!("{}", message),
        LogLevel::Info => tracing::info!("{}", message),
        LogLevel::Warning | LogLevel::Error => tracing::warn!("{}", message),
    }
}
