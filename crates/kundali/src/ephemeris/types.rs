use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ephemeris::ayanamsa::Ayanamsa;
use crate::error::KundaliError;

/// Observer altitude in metres used for the topocentric correction.
pub const DEFAULT_ALTITUDE_M: f64 = 53.0;

/// Geographic location coordinates in decimal degrees, east and north positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// The nine grahas of a Vedic chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// Swiss Ephemeris body number. Rahu is the mean lunar node; Ketu has
    /// no number because it is always derived from Rahu.
    pub fn swiss_id(self) -> Option<i32> {
        match self {
            Body::Sun => Some(0),
            Body::Moon => Some(1),
            Body::Mercury => Some(2),
            Body::Venus => Some(3),
            Body::Mars => Some(4),
            Body::Jupiter => Some(5),
            Body::Saturn => Some(6),
            Body::Rahu => Some(10),
            Body::Ketu => None,
        }
    }

    pub fn is_node(self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Rahu => "rahu",
            Body::Ketu => "ketu",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = KundaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| KundaliError::unknown("body", s))
    }
}

/// Which Swiss Ephemeris backend computes positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EphemerisSource {
    /// Moshier analytic theory, no data files needed.
    #[default]
    Moshier,
    /// Swiss Ephemeris `.se1` data files.
    Swiss,
}

impl EphemerisSource {
    /// `SEFLG_MOSEPH` / `SEFLG_SWIEPH`.
    pub fn flag(self) -> i32 {
        match self {
            EphemerisSource::Moshier => 4,
            EphemerisSource::Swiss => 2,
        }
    }
}

/// Settings for ephemeris calculations, fixed at provider construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    pub source: EphemerisSource,
    /// Directory holding the data files when `source` is `Swiss`.
    pub ephemeris_path: Option<PathBuf>,
    pub ayanamsa: Ayanamsa,
    pub topocentric: bool,
    pub altitude_m: f64,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            source: EphemerisSource::Moshier,
            ephemeris_path: None,
            ayanamsa: Ayanamsa::Lahiri,
            topocentric: true,
            altitude_m: DEFAULT_ALTITUDE_M,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeris_settings_default() {
        let settings = EphemerisSettings::default();
        assert_eq!(settings.ayanamsa, Ayanamsa::Lahiri);
        assert_eq!(settings.source, EphemerisSource::Moshier);
        assert!(settings.topocentric);
        assert_eq!(settings.altitude_m, 53.0);
    }

    #[test]
    fn test_body_ids() {
        assert_eq!(Body::Rahu.swiss_id(), Some(10));
        assert_eq!(Body::Ketu.swiss_id(), None);
        assert_eq!("Saturn".parse::<Body>().unwrap(), Body::Saturn);
        assert_eq!(serde_json::to_string(&Body::Ketu).unwrap(), "\"ketu\"");
    }

    #[test]
    fn test_coordinate_range() {
        assert!(GeoCoordinate::new(23.03, 72.62).is_valid());
        assert!(!GeoCoordinate::new(91.0, 0.0).is_valid());
        assert!(!GeoCoordinate::new(0.0, -181.0).is_valid());
    }
}
