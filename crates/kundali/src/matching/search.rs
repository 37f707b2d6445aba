use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ashtakoota::score;
use crate::chart::Chart;
use crate::error::KundaliError;
use crate::matching::catalogue::{CatalogueEntry, CATALOGUE};
use crate::vedic::nakshatra::Nakshatra;
use crate::vedic::profile::CompatibilityProfile;
use crate::vedic::rashi::Sign;

/// Candidates must score strictly above this total.
pub const MATCH_THRESHOLD: f64 = 22.0;
/// Synthetic Moon degree for catalogue profiles, mid-sign.
pub const REFERENCE_DEGREE: f64 = 15.0;

/// Which side of the pairing the searched profile takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Groom,
    Bride,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Role::Groom => "groom",
            Role::Bride => "bride",
        })
    }
}

impl FromStr for Role {
    type Err = KundaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groom" => Ok(Role::Groom),
            "bride" => Ok(Role::Bride),
            _ => Err(KundaliError::unknown("role", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    #[serde(rename = "rashi")]
    pub sign: Sign,
    pub nakshatra: Nakshatra,
    #[serde(rename = "letters")]
    pub phonetic_hints: Vec<&'static str>,
    pub score: f64,
}

fn score_entry(profile: &CompatibilityProfile, role: Role, entry: &CatalogueEntry) -> f64 {
    let other = CompatibilityProfile::from_moon(entry.sign, REFERENCE_DEGREE, entry.nakshatra);
    match role {
        Role::Groom => score(profile, &other).total,
        Role::Bride => score(&other, profile).total,
    }
}

/// Score `profile` against every catalogue pairing and keep the good ones,
/// best first. Equal scores stay in catalogue order.
pub fn find_matches(profile: &CompatibilityProfile, role: Role) -> Vec<MatchCandidate> {
    let mut matches: Vec<MatchCandidate> = CATALOGUE
        .iter()
        .filter_map(|entry| {
            let total = score_entry(profile, role, entry);
            (total > MATCH_THRESHOLD).then(|| MatchCandidate {
                sign: entry.sign,
                nakshatra: entry.nakshatra,
                phonetic_hints: entry.phonetic_hints.to_vec(),
                score: total,
            })
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    log::info!(
        "{} matches above {MATCH_THRESHOLD} for {role} {} / {}",
        matches.len(),
        profile.moon_sign,
        profile.nakshatra
    );
    matches
}

pub fn find_matches_for_chart(chart: &Chart, role: Role) -> Vec<MatchCandidate> {
    find_matches(&chart.profile(), role)
}
