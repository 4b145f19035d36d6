//! Location filter.

use crate::model::Station;

/// Keeps the stations whose id or name equals any entry of `locations`,
/// ignoring case. An empty `locations` keeps every station.
///
/// Order is preserved. An empty result is not an error.
pub fn filter_locations(stations: Vec<Station>, locations: &[String]) -> Vec<Station> {
    if locations.is_empty() {
        return stations;
    }

    let wanted: Vec<String> = locations.iter().map(|l| l.to_lowercase()).collect();

    stations
        .into_iter()
        .filter(|s| {
            let id = s.id.to_lowercase();
            let name = s.name.to_lowercase();
            wanted.iter().any(|w| *w == id || *w == name)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
