//! Core data types for the UV index monitor.
//!
//! This module defines the shared domain model imported by all other modules:
//! the canonical `Station` record, the query options that drive filtering and
//! ordering, the `Parsed` fallback wrapper and the feed error taxonomy.

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono_tz::Tz;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Station
// ---------------------------------------------------------------------------

/// One monitoring station's latest observation, in canonical form.
///
/// Produced by `normalize::normalize_location` from a raw feed record.
/// The feed's `id` attribute carries the display name and its `name`
/// element carries the short code; `id` and `name` here hold the
/// corrected roles.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Short code, upper-cased, e.g. `"SYD"`.
    pub id: String,
    /// Display name, e.g. `"Sydney"`.
    pub name: String,
    /// Never negative; `0.0` when the feed value was unusable.
    pub uv_index: f64,
    /// Observation time in the station's civil zone (UTC when unknown).
    pub time: DateTime<Tz>,
    /// True iff the feed reported status `"ok"`.
    pub available: bool,
    /// Raw status text when unavailable, empty otherwise.
    pub status: String,
}

// ---------------------------------------------------------------------------
// Field parse outcome
// ---------------------------------------------------------------------------

/// Outcome of parsing one loosely-typed feed field.
///
/// `Fallback` carries the default substituted for an unusable value, so the
/// caller always gets a `T` but can still tell that the feed was degraded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed<T> {
    Value(T),
    Fallback(T),
}

impl<T> Parsed<T> {
    pub fn into_inner(self) -> T {
        match self {
            Parsed::Value(v) | Parsed::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Parsed::Fallback(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Parsed::Value(v) => Parsed::Value(f(v)),
            Parsed::Fallback(v) => Parsed::Fallback(f(v)),
        }
    }
}

// ---------------------------------------------------------------------------
// Query options
// ---------------------------------------------------------------------------

/// Field used to order the station listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Id,
    #[default]
    Name,
    UvIndex,
    Time,
    Available,
}

impl SortField {
    /// Every spelling accepted on the command line, canonical names first.
    pub const ACCEPTED: &'static [&'static str] = &[
        "id", "name", "index", "time", "status", "location", "uv", "available",
    ];
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Id => write!(f, "id"),
            SortField::Name => write!(f, "name"),
            SortField::UvIndex => write!(f, "index"),
            SortField::Time => write!(f, "time"),
            SortField::Available => write!(f, "status"),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "name" | "location" => Ok(SortField::Name),
            "index" | "uv" => Ok(SortField::UvIndex),
            "time" => Ok(SortField::Time),
            "status" | "available" => Ok(SortField::Available),
            other => Err(format!(
                "invalid sort field '{}' (expected one of: {})",
                other,
                SortField::ACCEPTED.join(", ")
            )),
        }
    }
}

/// Options passed from the command line into the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Ids or names to keep, matched case-insensitively. Empty keeps all.
    pub locations: Vec<String>,
    pub sort_field: SortField,
    pub reverse: bool,
    /// Compact one-line-per-station output without a header.
    pub quiet: bool,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that abort a run before anything is rendered.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeedError {
    /// The request could not be sent or no response arrived.
    #[error("ARPANSA data file unavailable: {0}")]
    Unavailable(String),
    /// Non-2xx HTTP response from the provider.
    #[error("ARPANSA data file unavailable: HTTP {0}")]
    HttpStatus(u16),
    /// The response body (or replay file) could not be read in full.
    #[error("unable to read ARPANSA data file: {0}")]
    Unreadable(String),
    /// The body does not match the `stations/location` schema.
    #[error("unexpected format of ARPANSA data file: {0}")]
    MalformedFeed(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
