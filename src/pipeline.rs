//! One run of the monitor: fetch → parse → normalize → filter → sort →
//! render.
//!
//! Any fatal error returns before a single line is rendered, so callers
//! never see a partial listing.

use crate::analysis::{filter_locations, sort_stations};
use crate::ingest::FeedFetcher;
use crate::ingest::arpansa::parse_feed;
use crate::model::{FeedError, QueryOptions, Station};
use crate::normalize::normalize_all;
use crate::report::render;
use crate::stations::TimeZoneTable;

/// Fetches and normalizes every station in the feed, in feed order.
pub fn load_stations(
    fetcher: &dyn FeedFetcher,
    zones: &TimeZoneTable,
) -> Result<Vec<Station>, FeedError> {
    let body = fetcher.fetch()?;
    let raws = parse_feed(&body)?;
    Ok(normalize_all(&raws, zones))
}

/// Applies the filter and ordering from `options`.
pub fn select(stations: Vec<Station>, options: &QueryOptions) -> Vec<Station> {
    let mut selected = filter_locations(stations, &options.locations);
    sort_stations(&mut selected, options.sort_field, options.reverse);
    selected
}

/// Runs the whole pipeline and returns the rendered lines.
pub fn run(
    fetcher: &dyn FeedFetcher,
    zones: &TimeZoneTable,
    options: &QueryOptions,
) -> Result<Vec<String>, FeedError> {
    let stations = load_stations(fetcher, zones)?;
    let total = stations.len();
    let selected = select(stations, options);

    tracing::debug!(
        total,
        shown = selected.len(),
        sort = %options.sort_field,
        reverse = options.reverse,
        "stations selected"
    );

    Ok(render(&selected, options.quiet))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
