//! Selection and ordering of normalized stations.
//!
//! Submodules:
//! - `filter`: keeps the stations named on the command line.
//! - `sort`: orders stations by one field, then optionally reverses.

pub mod filter;
pub mod sort;

pub use filter::filter_locations;
pub use sort::{compare, sort_stations};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz;

    use crate::model::Station;

    /// Builds a station observed `minutes` after 08:00 UTC on 6 March 2024.
    pub fn station(id: &str, name: &str, uv_index: f64, minutes: i64, status: &str) -> Station {
        let base = Utc.with_ymd_and_hms(2024, 3, 6, 8, 0, 0).unwrap();
        Station {
            id: id.to_string(),
            name: name.to_string(),
            uv_index,
            time: (base + chrono::Duration::minutes(minutes)).with_timezone(&Tz::UTC),
            available: status.is_empty(),
            status: status.to_string(),
        }
    }
}
