//! The twelve sidereal signs (rashis).
//!
//! Signs are equal 30° segments of the sidereal ecliptic starting at Aries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KundaliError;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const SIGN_ORDER: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

impl Sign {
    /// Sign containing the given sidereal longitude.
    pub fn from_longitude(longitude: f64) -> Self {
        let index = (normalize_degrees(longitude) / SIGN_SPAN).floor() as usize;
        SIGN_ORDER[index % 12]
    }

    /// Zero-based position in the zodiac, Aries = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based sign number, Aries = 1.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

/// Degrees elapsed within the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % SIGN_SPAN
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sign {
    type Err = KundaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SIGN_ORDER
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| KundaliError::unknown("sign", s))
    }
}
