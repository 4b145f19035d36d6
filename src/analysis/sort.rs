//! Station ordering.
//!
//! Each `SortField` maps to a total three-way comparison over two stations.
//! Sorting is stable, so stations the comparison treats as equal keep the
//! order they arrived in. Reversal is a separate pass over the sorted list.

use std::cmp::Ordering;

use crate::model::{SortField, Station};

/// Compares two stations on `field`, ascending.
pub fn compare(field: SortField, a: &Station, b: &Station) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::UvIndex => compare_f64(a.uv_index, b.uv_index),
        SortField::Time => a.time.cmp(&b.time),
        SortField::Available => availability_rank(a)
            .cmp(&availability_rank(b))
            .then_with(|| a.status.cmp(&b.status)),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Unavailable stations rank 0, available ones 1.
fn availability_rank(s: &Station) -> u8 {
    u8::from(s.available)
}

/// Sorts `stations` by `field` and then, if `reverse` is set, reverses the
/// whole sorted sequence.
pub fn sort_stations(stations: &mut [Station], field: SortField, reverse: bool) {
    stations.sort_by(|a, b| compare(field, a, b));
    if reverse {
        stations.reverse();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::station;

    fn names(stations: &[Station]) -> Vec<&str> {
        stations.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name_is_lexicographic() {
        let mut stations = vec![
            station("SYD", "Sydney", 5.5, 0, ""),
            station("ADL", "Adelaide", 7.0, 0, ""),
            station("MEL", "Melbourne", 1.0, 0, ""),
        ];
        sort_stations(&mut stations, SortField::Name, false);
        assert_eq!(names(&stations), vec!["Adelaide", "Melbourne", "Sydney"]);
    }

    #[test]
    fn test_sort_by_id_uses_short_code() {
        let mut stations = vec![
            station("SYD", "Sydney", 0.0, 0, ""),
            station("ADL", "Adelaide", 0.0, 0, ""),
            station("CAS", "Casey", 0.0, 0, ""),
        ];
        sort_stations(&mut stations, SortField::Id, false);
        let ids: Vec<_> = stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ADL", "CAS", "SYD"]);
    }

    #[test]
    fn test_sort_by_index_is_numeric() {
        let mut stations = vec![
            station("SYD", "Sydney", 5.5, 0, ""),
            station("DAR", "Darwin", 12.0, 0, ""),
            station("PER", "Perth", 0.0, 0, ""),
            station("KIN", "Kingston", 2.0, 0, "fault"),
        ];
        sort_stations(&mut stations, SortField::UvIndex, false);
        assert_eq!(names(&stations), vec!["Perth", "Kingston", "Sydney", "Darwin"]);
    }

    #[test]
    fn test_sort_by_index_keeps_arrival_order_for_equal_values() {
        let mut stations = vec![
            station("MAW", "Mawson", 0.0, 0, ""),
            station("CAS", "Casey", 0.0, 0, ""),
            station("DAV", "Davis", 0.0, 0, ""),
        ];
        sort_stations(&mut stations, SortField::UvIndex, false);
        assert_eq!(names(&stations), vec!["Mawson", "Casey", "Davis"]);
    }

    #[test]
    fn test_sort_by_time_is_chronological() {
        let mut stations = vec![
            station("SYD", "Sydney", 0.0, 30, ""),
            station("PER", "Perth", 0.0, -15, ""),
            station("ADL", "Adelaide", 0.0, 5, ""),
        ];
        sort_stations(&mut stations, SortField::Time, false);
        assert_eq!(names(&stations), vec!["Perth", "Adelaide", "Sydney"]);
    }

    #[test]
    fn test_sort_by_time_compares_instants_across_zones() {
        use chrono_tz::Australia;

        let mut sydney = station("SYD", "Sydney", 0.0, 10, "");
        sydney.time = sydney.time.with_timezone(&Australia::Sydney);
        let perth = station("PER", "Perth", 0.0, 0, "");

        let mut stations = vec![sydney, perth];
        sort_stations(&mut stations, SortField::Time, false);
        assert_eq!(names(&stations), vec!["Perth", "Sydney"], "local wall clock must not matter");
    }

    #[test]
    fn test_sort_by_availability_puts_unavailable_first_then_status() {
        let mut stations = vec![
            station("SYD", "Sydney", 0.0, 0, ""),
            station("KIN", "Kingston", 0.0, 0, "offline"),
            station("PER", "Perth", 0.0, 0, ""),
            station("CAS", "Casey", 0.0, 0, "fault"),
        ];
        sort_stations(&mut stations, SortField::Available, false);
        assert_eq!(names(&stations), vec!["Casey", "Kingston", "Sydney", "Perth"]);
        assert!(!stations[0].available && !stations[1].available);
        assert!(stations[2].available && stations[3].available);
    }

    #[test]
    fn test_reverse_mirrors_sorted_order() {
        let mut stations = vec![
            station("SYD", "Sydney", 0.0, 0, ""),
            station("ADL", "Adelaide", 0.0, 0, ""),
            station("MEL", "Melbourne", 0.0, 0, ""),
        ];
        let mut ascending = stations.clone();
        sort_stations(&mut ascending, SortField::Name, false);
        sort_stations(&mut stations, SortField::Name, true);

        let mut mirrored = ascending.clone();
        mirrored.reverse();
        assert_eq!(stations, mirrored);
    }

    #[test]
    fn test_reverse_flips_ties_instead_of_rebreaking_them() {
        let mut stations = vec![
            station("AAA", "Dup", 1.0, 0, ""),
            station("BBB", "Dup", 2.0, 0, ""),
            station("CCC", "Alpha", 3.0, 0, ""),
        ];
        sort_stations(&mut stations, SortField::Name, true);
        let ids: Vec<_> = stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["BBB", "AAA", "CCC"]);
    }

    #[test]
    fn test_compare_is_three_way_for_close_floats() {
        let a = station("A", "A", 0.1 + 0.2, 0, "");
        let b = station("B", "B", 0.3, 0, "");
        assert_eq!(compare(SortField::UvIndex, &a, &b), Ordering::Greater);
        assert_eq!(compare(SortField::UvIndex, &b, &a), Ordering::Less);
        assert_eq!(compare(SortField::UvIndex, &a, &a), Ordering::Equal);
    }

    #[test]
    fn test_sort_empty_slice_is_noop() {
        let mut stations: Vec<Station> = Vec::new();
        sort_stations(&mut stations, SortField::Time, true);
        assert!(stations.is_empty());
    }
}
