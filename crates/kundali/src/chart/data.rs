use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ephemeris::types::Body;
use crate::vedic::nakshatra::{get_nakshatra_for_longitude, Nakshatra};
use crate::vedic::profile::CompatibilityProfile;
use crate::vedic::rashi::Sign;

/// One graha's placement in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub name: Body,
    /// Sidereal longitude, [0, 360).
    #[serde(rename = "position")]
    pub longitude: f64,
    /// Whole-sign house counted from the ascendant's sign, 1 to 12.
    pub house: u8,
    #[serde(rename = "zodiac")]
    pub sign: Sign,
    #[serde(rename = "deviation")]
    pub degree_in_sign: f64,
    /// Always false; retrograde motion is not computed.
    pub retrograde: bool,
}

/// A computed natal chart. Built once by the chart engine and not mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(rename = "ascendant")]
    pub ascendant_longitude: f64,
    pub ascendant_sign: Sign,
    /// The Moon's nakshatra.
    pub nakshatra: Nakshatra,
    #[serde(rename = "planets")]
    pub bodies: BTreeMap<Body, BodyPlacement>,
    #[serde(rename = "moon_zodiac")]
    pub moon_sign: Sign,
    #[serde(rename = "moon_deviate")]
    pub moon_degree_in_sign: f64,
}

impl Chart {
    pub fn body(&self, body: Body) -> Option<&BodyPlacement> {
        self.bodies.get(&body)
    }

    pub fn moon(&self) -> Option<&BodyPlacement> {
        self.body(Body::Moon)
    }

    /// Quarter of the Moon's nakshatra, 1 to 4.
    pub fn moon_pada(&self) -> Option<u8> {
        self.moon()
            .map(|moon| get_nakshatra_for_longitude(moon.longitude).pada)
    }

    /// Ashtakoota attributes of this chart's Moon.
    pub fn profile(&self) -> CompatibilityProfile {
        CompatibilityProfile::from_moon(self.moon_sign, self.moon_degree_in_sign, self.nakshatra)
    }
}
