//! Raw feed record → canonical `Station`.
//!
//! Every field-level problem degrades to a documented default instead of
//! failing the record: an unusable index becomes `0.0`, an unusable
//! timestamp becomes `0001-01-01 00:00 UTC`, and a station with no known
//! time zone keeps UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::ingest::arpansa::RawLocation;
use crate::logging::{NormalizationSummary, log_normalization_summary};
use crate::model::{Parsed, Station};
use crate::stations::TimeZoneTable;

/// Layout of the feed's `utcdatetime` field, e.g. `2024/03/06 08:07`.
pub const UTC_DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Status text that marks a reading as valid.
pub const STATUS_OK: &str = "ok";

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Parses the `index` text. Anything that is not a finite, non-negative
/// number falls back to `0.0`.
pub fn parse_uv_index(text: &str) -> Parsed<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Parsed::Value(v),
        _ => Parsed::Fallback(0.0),
    }
}

/// The timestamp substituted when `utcdatetime` cannot be parsed.
pub fn zero_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Parses the naive `utcdatetime` text as a UTC instant.
pub fn parse_utc_datetime(text: &str) -> Parsed<DateTime<Utc>> {
    match NaiveDateTime::parse_from_str(text.trim(), UTC_DATETIME_FORMAT) {
        Ok(naive) => Parsed::Value(Utc.from_utc_datetime(&naive)),
        Err(_) => Parsed::Fallback(Utc.from_utc_datetime(&zero_timestamp())),
    }
}

/// Re-expresses a UTC instant in the station's civil zone, or in UTC when
/// the table has no entry for `station_name`.
pub fn localize(
    instant: DateTime<Utc>,
    station_name: &str,
    zones: &TimeZoneTable,
) -> DateTime<Tz> {
    match zones.lookup(station_name) {
        Some(zone) => instant.with_timezone(&zone),
        None => {
            tracing::debug!(station = %station_name, "no time zone configured, keeping UTC");
            instant.with_timezone(&Tz::UTC)
        }
    }
}

// ---------------------------------------------------------------------------
// Record mapping
// ---------------------------------------------------------------------------

/// A normalized station plus which of its fields had to fall back.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub station: Station,
    pub index_fallback: bool,
    pub time_fallback: bool,
    pub zone_found: bool,
}

/// Maps one raw feed record to a `Station`.
///
/// The provider's `id` attribute is the display name and its `name`
/// element is the short code, so the two are swapped here.
pub fn normalize_location(raw: &RawLocation, zones: &TimeZoneTable) -> Normalized {
    let name = raw.id.clone();
    let id = raw.name.to_uppercase();

    let uv_index = parse_uv_index(&raw.index);
    if uv_index.is_fallback() {
        tracing::debug!(station = %name, index = %raw.index, "unusable UV index, using 0.0");
    }

    let instant = parse_utc_datetime(&raw.utcdatetime);
    if instant.is_fallback() {
        tracing::debug!(station = %name, utcdatetime = %raw.utcdatetime, "unusable timestamp");
    }

    let zone_found = zones.lookup(&name).is_some();
    let time = localize(instant.into_inner(), &name, zones);

    let available = raw.status == STATUS_OK;
    let status = if available { String::new() } else { raw.status.clone() };

    Normalized {
        index_fallback: uv_index.is_fallback(),
        time_fallback: instant.is_fallback(),
        zone_found,
        station: Station {
            id,
            name,
            uv_index: uv_index.into_inner(),
            time,
            available,
            status,
        },
    }
}

/// Normalizes every record, keeping feed order, and logs one summary of
/// the fallbacks that were applied.
pub fn normalize_all(raws: &[RawLocation], zones: &TimeZoneTable) -> Vec<Station> {
    let normalized: Vec<Normalized> =
        raws.iter().map(|raw| normalize_location(raw, zones)).collect();
    log_normalization_summary(&summarize(&normalized));
    normalized.into_iter().map(|n| n.station).collect()
}

/// Counts the fallbacks recorded on each normalized station.
pub fn summarize(normalized: &[Normalized]) -> NormalizationSummary {
    let mut summary = NormalizationSummary::default();
    for n in normalized {
        summary.record(n.index_fallback, n.time_fallback, n.zone_found);
    }
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
