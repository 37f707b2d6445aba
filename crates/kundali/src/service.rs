use serde::{Deserialize, Serialize};

use crate::ashtakoota::{score_charts, AshtakootaScore};
use crate::chart::{BirthMoment, Chart, ChartEngine};
use crate::ephemeris::provider::PositionProvider;
use crate::ephemeris::types::GeoCoordinate;
use crate::error::{KundaliError, Result};
use crate::geocode::{resolve_or_default, Geocoder, DEFAULT_COORDINATE};
use crate::matching::{find_matches_for_chart, MatchCandidate, Role};

/// Earliest and latest birth years accepted from callers.
pub const MIN_BIRTH_YEAR: i32 = 1800;
pub const MAX_BIRTH_YEAR: i32 = 2399;
pub const DEFAULT_UTC_OFFSET_HOURS: f64 = 5.5;
pub const DEFAULT_BIRTH_PLACE: &str = "Ahmedabad, Gujarat, India";

/// Birth data as it arrives from a caller, place given by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    /// Falls back to the service default when absent.
    #[serde(default)]
    pub utc_offset_hours: Option<f64>,
    #[serde(default = "default_birth_place")]
    pub birth_place: String,
}

fn default_birth_place() -> String {
    DEFAULT_BIRTH_PLACE.to_string()
}

impl BirthDetails {
    pub fn moment(&self, default_offset: f64) -> Result<BirthMoment> {
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&self.year) {
            return Err(KundaliError::invalid_moment(format!(
                "year {} is outside {MIN_BIRTH_YEAR}..={MAX_BIRTH_YEAR}",
                self.year
            )));
        }
        BirthMoment::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.utc_offset_hours.unwrap_or(default_offset),
        )
    }
}

/// Fallbacks applied at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefaults {
    pub coordinate: GeoCoordinate,
    pub utc_offset_hours: f64,
}

impl Default for ServiceDefaults {
    fn default() -> Self {
        Self {
            coordinate: DEFAULT_COORDINATE,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

/// A chart together with where it was cast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    #[serde(flatten)]
    pub chart: Chart,
    pub birth_place: String,
    pub location: GeoCoordinate,
    /// True when the place was not found and the default coordinate was used.
    pub degraded_location: bool,
}

/// Entry point for callers: chart casting, scoring and match search.
pub struct KundaliService<P> {
    engine: ChartEngine<P>,
    defaults: ServiceDefaults,
}

impl<P: PositionProvider> KundaliService<P> {
    pub fn new(provider: P) -> Self {
        Self::with_defaults(provider, ServiceDefaults::default())
    }

    pub fn with_defaults(provider: P, defaults: ServiceDefaults) -> Self {
        Self {
            engine: ChartEngine::new(provider),
            defaults,
        }
    }

    pub fn defaults(&self) -> &ServiceDefaults {
        &self.defaults
    }

    pub fn chart(&self, moment: &BirthMoment, location: GeoCoordinate) -> Result<Chart> {
        self.engine.compute(moment, location)
    }

    pub fn chart_for_place(
        &self,
        details: &BirthDetails,
        geocoder: &dyn Geocoder,
    ) -> Result<ChartReport> {
        let moment = details.moment(self.defaults.utc_offset_hours)?;
        let resolved = resolve_or_default(geocoder, &details.birth_place, self.defaults.coordinate);
        let chart = self.engine.compute(&moment, resolved.coordinate)?;
        Ok(ChartReport {
            chart,
            birth_place: details.birth_place.clone(),
            location: resolved.coordinate,
            degraded_location: resolved.degraded,
        })
    }

    /// Scoring works on already computed charts and cannot fail.
    pub fn score(&self, groom: &Chart, bride: &Chart) -> AshtakootaScore {
        score_charts(groom, bride)
    }

    pub fn matches(&self, chart: &Chart, role: Role) -> Vec<MatchCandidate> {
        find_matches_for_chart(chart, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_details_year_range() {
        let details = BirthDetails {
            year: 1799,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            utc_offset_hours: None,
            birth_place: default_birth_place(),
        };
        assert!(matches!(
            details.moment(5.5),
            Err(KundaliError::InvalidBirthMoment { .. })
        ));
        let ok = BirthDetails {
            year: 2399,
            ..details
        };
        assert_eq!(ok.moment(5.5).unwrap().utc_offset_hours, 5.5);
    }

    #[test]
    fn test_birth_details_defaults_from_json() {
        let details: BirthDetails = serde_json::from_str(
            r#"{"year": 1995, "month": 8, "day": 20, "hour": 6, "minute": 45}"#,
        )
        .unwrap();
        assert_eq!(details.birth_place, DEFAULT_BIRTH_PLACE);
        assert_eq!(details.second, 0);
        assert_eq!(details.utc_offset_hours, None);
        assert_eq!(details.moment(-3.0).unwrap().utc_offset_hours, -3.0);
    }
}
