use std::collections::BTreeMap;

use crate::chart::data::{BodyPlacement, Chart};
use crate::chart::moment::BirthMoment;
use crate::ephemeris::provider::PositionProvider;
use crate::ephemeris::types::{Body, GeoCoordinate, ALL_BODIES};
use crate::error::{KundaliError, Result};
use crate::vedic::nakshatra::Nakshatra;
use crate::vedic::rashi::{degree_in_sign, normalize_degrees, Sign};

/// Whole-sign house of a body, counted from the ascendant's sign as house 1.
pub fn house_for(ascendant_longitude: f64, body_longitude: f64) -> u8 {
    let asc = Sign::from_longitude(ascendant_longitude).number();
    let body = Sign::from_longitude(body_longitude).number();
    ((body + 12 - asc) % 12 + 1) as u8
}

/// Computes charts from birth moments against a position provider.
#[derive(Debug, Clone)]
pub struct ChartEngine<P> {
    provider: P,
}

impl<P: PositionProvider> ChartEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn compute(&self, moment: &BirthMoment, location: GeoCoordinate) -> Result<Chart> {
        if !location.is_valid() {
            return Err(KundaliError::invalid_moment(format!(
                "coordinate out of range: lat {} lon {}",
                location.latitude, location.longitude
            )));
        }
        let jd = moment.julian_day()?;
        log::debug!("julian day {jd:.6} at {:.4},{:.4}", location.latitude, location.longitude);

        let ascendant = finite("ascendant", self.provider.ascendant_longitude(jd, &location)?)?;
        log::debug!("ascendant {ascendant:.4}");

        let mut bodies = BTreeMap::new();
        for body in ALL_BODIES {
            let longitude = match body {
                Body::Ketu => match bodies.get(&Body::Rahu) {
                    Some(BodyPlacement { longitude, .. }) => normalize_degrees(longitude + 180.0),
                    None => return Err(KundaliError::unavailable("ketu", "rahu missing")),
                },
                _ => finite(body.name(), self.provider.body_longitude(jd, body, &location)?)?,
            };
            log::debug!("{body} at {longitude:.4}");
            bodies.insert(body, place(body, longitude, ascendant));
        }

        let moon = bodies
            .get(&Body::Moon)
            .map(|p| p.longitude)
            .ok_or_else(|| KundaliError::unavailable("moon", "no position computed"))?;

        let chart = Chart {
            ascendant_longitude: ascendant,
            ascendant_sign: Sign::from_longitude(ascendant),
            nakshatra: Nakshatra::from_longitude(moon),
            bodies,
            moon_sign: Sign::from_longitude(moon),
            moon_degree_in_sign: degree_in_sign(moon),
        };
        log::info!(
            "chart computed: lagna {} moon {} in {}",
            chart.ascendant_sign,
            chart.moon_sign,
            chart.nakshatra
        );
        Ok(chart)
    }
}

/// Provider output must be a real angle before any sign or mansion is read
/// from it.
fn finite(target: &str, longitude: f64) -> Result<f64> {
    if !longitude.is_finite() {
        return Err(KundaliError::unavailable(
            target,
            format!("provider returned a non-finite longitude ({longitude})"),
        ));
    }
    Ok(normalize_degrees(longitude))
}

fn place(name: Body, longitude: f64, ascendant: f64) -> BodyPlacement {
    BodyPlacement {
        name,
        longitude,
        house: house_for(ascendant, longitude),
        sign: Sign::from_longitude(longitude),
        degree_in_sign: degree_in_sign(longitude),
        retrograde: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl PositionProvider for Fixed {
        fn body_longitude(&self, _jd: f64, body: Body, _observer: &GeoCoordinate) -> Result<f64> {
            Ok(match body {
                Body::Sun => 280.0,
                Body::Moon => 5.0,
                Body::Mercury => 265.5,
                Body::Venus => 300.2,
                Body::Mars => 330.0,
                Body::Jupiter => 10.0,
                Body::Saturn => 40.0,
                Body::Rahu => 350.0,
                Body::Ketu => unreachable!("ketu is derived"),
            })
        }

        fn ascendant_longitude(&self, _jd: f64, _observer: &GeoCoordinate) -> Result<f64> {
            Ok(355.0)
        }
    }

    struct Broken;

    impl PositionProvider for Broken {
        fn body_longitude(&self, _jd: f64, body: Body, _observer: &GeoCoordinate) -> Result<f64> {
            Err(KundaliError::unavailable(body.name(), "offline"))
        }

        fn ascendant_longitude(&self, _jd: f64, _observer: &GeoCoordinate) -> Result<f64> {
            Ok(0.0)
        }
    }

    struct Nan {
        ascendant: f64,
        moon: f64,
    }

    impl PositionProvider for Nan {
        fn body_longitude(&self, _jd: f64, body: Body, _observer: &GeoCoordinate) -> Result<f64> {
            Ok(if body == Body::Moon { self.moon } else { 10.0 })
        }

        fn ascendant_longitude(&self, _jd: f64, _observer: &GeoCoordinate) -> Result<f64> {
            Ok(self.ascendant)
        }
    }

    fn moment() -> BirthMoment {
        BirthMoment::new(1990, 6, 15, 10, 30, 0, 5.5).unwrap()
    }

    #[test]
    fn test_house_for() {
        assert_eq!(house_for(0.0, 0.0), 1);
        assert_eq!(house_for(29.9, 0.1), 1);
        assert_eq!(house_for(0.0, 359.0), 12);
        assert_eq!(house_for(100.0, 95.0), 1);
        assert_eq!(house_for(100.0, 80.0), 12);
        assert_eq!(house_for(330.0, 10.0), 2);
        assert_eq!(house_for(310.0, 10.0), 3);
    }

    #[test]
    fn test_compute_chart() {
        let chart = ChartEngine::new(Fixed)
            .compute(&moment(), GeoCoordinate::new(23.03, 72.62))
            .unwrap();
        assert_eq!(chart.bodies.len(), 9);
        assert_eq!(chart.ascendant_sign, Sign::Pisces);
        assert_eq!(chart.moon_sign, Sign::Aries);
        assert_eq!(chart.nakshatra, Nakshatra::Ashwini);
        assert_eq!(chart.moon().unwrap().house, 2);
        assert_eq!(chart.body(Body::Ketu).unwrap().longitude, 170.0);
        assert_eq!(chart.body(Body::Ketu).unwrap().sign, Sign::Virgo);
        assert_eq!(chart.body(Body::Rahu).unwrap().house, 1);
        assert!(chart.bodies.values().all(|b| !b.retrograde));
    }

    #[test]
    fn test_provider_failure_is_surfaced() {
        let err = ChartEngine::new(Broken)
            .compute(&moment(), GeoCoordinate::new(23.03, 72.62))
            .unwrap_err();
        assert!(matches!(err, KundaliError::ComputationUnavailable { .. }));
    }

    #[test]
    fn test_non_finite_longitudes_are_rejected() {
        let location = GeoCoordinate::new(23.03, 72.62);
        for provider in [
            Nan { ascendant: 10.0, moon: f64::NAN },
            Nan { ascendant: f64::NAN, moon: 10.0 },
            Nan { ascendant: 10.0, moon: f64::INFINITY },
        ] {
            let err = ChartEngine::new(provider).compute(&moment(), location).unwrap_err();
            assert!(matches!(err, KundaliError::ComputationUnavailable { .. }));
        }
    }

    #[test]
    fn test_invalid_date_fails_before_provider() {
        let bad = BirthMoment {
            day: 30,
            month: 2,
            ..moment()
        };
        let err = ChartEngine::new(Broken)
            .compute(&bad, GeoCoordinate::new(23.03, 72.62))
            .unwrap_err();
        assert!(matches!(err, KundaliError::InvalidBirthMoment { .. }));
    }
}
