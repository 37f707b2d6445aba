//! Place-name resolution boundary.
//!
//! The core never fails a chart because a place could not be found; it
//! falls back to a fixed coordinate and marks the result as degraded.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ephemeris::types::GeoCoordinate;
use crate::error::KundaliError;

/// Ahmedabad, Gujarat.
pub const DEFAULT_COORDINATE: GeoCoordinate = GeoCoordinate {
    latitude: 23.03,
    longitude: 72.62,
};

pub trait Geocoder {
    fn resolve(&self, place: &str) -> Option<GeoCoordinate>;
}

/// In-memory gazetteer with case-insensitive lookup.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: HashMap<String, GeoCoordinate>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: &str, coordinate: GeoCoordinate) -> Self {
        self.insert(name, coordinate);
        self
    }

    pub fn insert(&mut self, name: &str, coordinate: GeoCoordinate) {
        self.places.insert(key(name), coordinate);
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, GeoCoordinate)> for StaticGeocoder {
    fn from_iter<I: IntoIterator<Item = (S, GeoCoordinate)>>(iter: I) -> Self {
        let mut geocoder = Self::new();
        for (name, coordinate) in iter {
            geocoder.insert(name.as_ref(), coordinate);
        }
        geocoder
    }
}

fn key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, place: &str) -> Option<GeoCoordinate> {
        self.places.get(&key(place)).copied()
    }
}

/// A coordinate and whether it came from the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub coordinate: GeoCoordinate,
    pub degraded: bool,
}

/// Resolve `place`, or fall back to `default` and flag the result.
pub fn resolve_or_default(
    geocoder: &dyn Geocoder,
    place: &str,
    default: GeoCoordinate,
) -> ResolvedLocation {
    match geocoder.resolve(place).filter(GeoCoordinate::is_valid) {
        Some(coordinate) => ResolvedLocation {
            coordinate,
            degraded: false,
        },
        None => {
            log::warn!(
                "{}; using default {:.2},{:.2}",
                KundaliError::GeocodeUnavailable {
                    place: place.to_string()
                },
                default.latitude,
                default.longitude
            );
            ResolvedLocation {
                coordinate: default,
                degraded: true,
            }
        }
    }
}
