#![allow(dead_code)]

use std::collections::HashMap;

use kundali::{Body, GeoCoordinate, KundaliError, PositionProvider, Result};

/// Position provider returning fixed sidereal longitudes.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    pub longitudes: HashMap<Body, f64>,
    pub ascendant: f64,
}

impl FixedProvider {
    pub fn new(ascendant: f64, positions: &[(Body, f64)]) -> Self {
        Self {
            longitudes: positions.iter().copied().collect(),
            ascendant,
        }
    }

    /// Moon at `moon`, everything else spread one sign apart from the Sun.
    pub fn with_moon(ascendant: f64, moon: f64) -> Self {
        Self::new(
            ascendant,
            &[
                (Body::Sun, 15.0),
                (Body::Moon, moon),
                (Body::Mercury, 45.0),
                (Body::Venus, 75.0),
                (Body::Mars, 105.0),
                (Body::Jupiter, 135.0),
                (Body::Saturn, 165.0),
                (Body::Rahu, 195.0),
            ],
        )
    }
}

impl PositionProvider for FixedProvider {
    fn body_longitude(&self, _jd: f64, body: Body, _observer: &GeoCoordinate) -> Result<f64> {
        self.longitudes
            .get(&body)
            .copied()
            .ok_or_else(|| KundaliError::ComputationUnavailable {
                target: body.to_string(),
                message: "not in fixture".to_string(),
            })
    }

    fn ascendant_longitude(&self, _jd: f64, _observer: &GeoCoordinate) -> Result<f64> {
        Ok(self.ascendant)
    }
}

pub fn ahmedabad() -> GeoCoordinate {
    GeoCoordinate::new(23.03, 72.62)
}
