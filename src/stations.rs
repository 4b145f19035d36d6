//! Station time zone registry.
//!
//! The ARPANSA feed reports every observation as a naive UTC timestamp. This
//! module maps each station's display name to the civil time zone its local
//! time should be shown in. Stations that are not listed keep UTC.

use std::collections::HashMap;

use chrono_tz::{Antarctica, Australia, Tz};

// ---------------------------------------------------------------------------
// Built-in registry
// ---------------------------------------------------------------------------

/// Civil time zone for one ARPANSA station.
pub struct StationZone {
    /// Display name exactly as it appears in the feed's `id` attribute.
    pub name: &'static str,
    pub zone: Tz,
}

/// All ARPANSA monitoring stations with a known time zone.
///
/// Alice Springs follows Darwin (no daylight saving) and the regional
/// Queensland sites follow Brisbane.
pub static TIME_ZONE_REGISTRY: &[StationZone] = &[
    StationZone {
        name: "Adelaide",
        zone: Australia::Adelaide,
    },
    StationZone {
        name: "Alice Springs",
        zone: Australia::Darwin,
    },
    StationZone {
        name: "Brisbane",
        zone: Australia::Brisbane,
    },
    StationZone {
        name: "Canberra",
        zone: Australia::Sydney,
    },
    StationZone {
        name: "Casey",
        zone: Antarctica::Casey,
    },
    StationZone {
        name: "Darwin",
        zone: Australia::Darwin,
    },
    StationZone {
        name: "Davis",
        zone: Antarctica::Davis,
    },
    StationZone {
        name: "Emerald",
        zone: Australia::Brisbane,
    },
    StationZone {
        name: "Gold Coast",
        zone: Australia::Brisbane,
    },
    StationZone {
        name: "Kingston",
        zone: Australia::Hobart,
    },
    StationZone {
        name: "Macquarie Island",
        zone: Antarctica::Macquarie,
    },
    StationZone {
        name: "Mawson",
        zone: Antarctica::Mawson,
    },
    StationZone {
        name: "Melbourne",
        zone: Australia::Melbourne,
    },
    StationZone {
        name: "Newcastle",
        zone: Australia::Sydney,
    },
    StationZone {
        name: "Perth",
        zone: Australia::Perth,
    },
    StationZone {
        name: "Sydney",
        zone: Australia::Sydney,
    },
    StationZone {
        name: "Townsville",
        zone: Australia::Brisbane,
    },
];

// ---------------------------------------------------------------------------
// Lookup table
// ---------------------------------------------------------------------------

/// Immutable station name → time zone lookup, built once per run and
/// passed to the normalizer.
#[derive(Debug, Clone, Default)]
pub struct TimeZoneTable {
    zones: HashMap<String, Tz>,
}

impl TimeZoneTable {
    /// Table with no entries; every station stays in UTC.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table holding the built-in `TIME_ZONE_REGISTRY`.
    pub fn builtin() -> Self {
        TIME_ZONE_REGISTRY
            .iter()
            .map(|s| (s.name.to_string(), s.zone))
            .collect()
    }

    /// Returns a copy of this table with `overrides` added on top.
    /// An override replaces any built-in entry of the same name.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, Tz)>,
    {
        for (name, zone) in overrides {
            if let Some(previous) = self.zones.insert(name.clone(), zone) {
                if previous != zone {
                    tracing::warn!(
                        station = %name,
                        from = %previous,
                        to = %zone,
                        "time zone overridden"
                    );
                }
            }
        }
        self
    }

    /// Looks up a station by display name. Returns `None` if not found;
    /// the caller keeps the timestamp in UTC.
    pub fn lookup(&self, station_name: &str) -> Option<Tz> {
        self.zones.get(station_name).copied()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl FromIterator<(String, Tz)> for TimeZoneTable {
    fn from_iter<I: IntoIterator<Item = (String, Tz)>>(iter: I) -> Self {
        TimeZoneTable {
            zones: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_station_names() {
        let mut seen = std::collections::HashSet::new();
        for station in TIME_ZONE_REGISTRY {
            assert!(
                seen.insert(station.name),
                "duplicate station '{}' found in TIME_ZONE_REGISTRY",
                station.name
            );
        }
    }

    #[test]
    fn test_registry_contains_all_arpansa_stations() {
        assert_eq!(TIME_ZONE_REGISTRY.len(), 17);
        let table = TimeZoneTable::builtin();
        assert_eq!(table.len(), TIME_ZONE_REGISTRY.len());
    }

    #[test]
    fn test_lookup_returns_configured_zone() {
        let table = TimeZoneTable::builtin();
        assert_eq!(table.lookup("Kingston"), Some(Australia::Hobart));
        assert_eq!(table.lookup("Alice Springs"), Some(Australia::Darwin));
        assert_eq!(table.lookup("Macquarie Island"), Some(Antarctica::Macquarie));
    }

    #[test]
    fn test_lookup_is_exact_match_on_display_name() {
        let table = TimeZoneTable::builtin();
        assert_eq!(table.lookup("sydney"), None, "lookup is keyed on the feed's exact spelling");
        assert_eq!(table.lookup("SYD"), None, "short codes are not keys");
    }

    #[test]
    fn test_lookup_returns_none_for_unknown_station() {
        assert!(TimeZoneTable::builtin().lookup("Hobart Airport").is_none());
        assert!(TimeZoneTable::empty().lookup("Sydney").is_none());
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let table = TimeZoneTable::builtin().with_overrides(vec![
            ("Kingston".to_string(), Australia::Melbourne),
            ("Broome".to_string(), Australia::Perth),
        ]);
        assert_eq!(table.lookup("Kingston"), Some(Australia::Melbourne));
        assert_eq!(table.lookup("Broome"), Some(Australia::Perth));
        assert_eq!(table.len(), TIME_ZONE_REGISTRY.len() + 1);
    }
}
