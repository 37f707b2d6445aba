//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KundaliError;
use crate::vedic::rashi::normalize_degrees;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    #[serde(alias = "Vishakha")]
    Visakha,
    Anuradha,
    Jyeshtha,
    #[serde(alias = "Moola")]
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

pub const NAKSHATRA_ORDER: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Visakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Alternate spellings accepted when parsing names.
const ALIASES: &[(&str, Nakshatra)] = &[
    ("vishakha", Nakshatra::Visakha),
    ("moola", Nakshatra::Mula),
];

/// The intercalary 28th mansion. Not part of the 27-fold division.
const ABHIJIT: &str = "abhijit";

impl Nakshatra {
    /// Mansion containing the given sidereal longitude.
    pub fn from_longitude(longitude: f64) -> Self {
        let index = (normalize_degrees(longitude) / NAKSHATRA_SEGMENT_SIZE).floor() as usize;
        NAKSHATRA_ORDER[index % NAKSHATRA_ORDER.len()]
    }

    /// Zero-based ordinal, Ashwini = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Visakha => "Visakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Start of the mansion in sidereal degrees.
    pub fn start_degree(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SEGMENT_SIZE
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Nakshatra {
    type Err = KundaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_name(s);
        if folded == ABHIJIT {
            return Err(KundaliError::UnknownCategory {
                category: "nakshatra",
                value: s.to_string(),
                note: Some("Abhijit is intercalary and not one of the 27 mansions".to_string()),
            });
        }
        NAKSHATRA_ORDER
            .iter()
            .copied()
            .find(|n| fold_name(n.name()) == folded)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == folded)
                    .map(|(_, n)| *n)
            })
            .ok_or_else(|| KundaliError::unknown("nakshatra", s))
    }
}

/// Position of a longitude inside its mansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NakshatraMetadata {
    pub nakshatra: Nakshatra,
    pub start: f64,
    pub end: f64,
    pub offset: f64,
    pub progress: f64,
    pub pada: u8,
}

/// Return metadata for the nakshatra containing the given longitude.
///
/// Pada is numbered 1 to 4.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraMetadata {
    let lon = normalize_degrees(longitude);
    let nakshatra = Nakshatra::from_longitude(lon);
    let start = nakshatra.start_degree();
    let offset = (lon - start).max(0.0);
    let pada = ((offset / PADA_SIZE) as u8).min(3) + 1;

    NakshatraMetadata {
        nakshatra,
        start,
        end: start + NAKSHATRA_SEGMENT_SIZE,
        offset,
        progress: offset / NAKSHATRA_SEGMENT_SIZE,
        pada,
    }
}
