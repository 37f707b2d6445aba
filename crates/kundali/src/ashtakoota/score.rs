//! Ashtakoota (eight-fold) compatibility scoring.
//!
//! Every rule takes the groom's attribute first. Varna and Gana are
//! asymmetric, so swapping the two profiles can change the total.

use serde::{Deserialize, Serialize};

use crate::ashtakoota::tables::{maitri_points, relation, VASHYA_TABLE, YONI_TABLE};
use crate::chart::Chart;
use crate::vedic::categories::{is_malefic_tara, Gana, Graha, Nadi, Varna, Vashya, Yoni};
use crate::vedic::profile::CompatibilityProfile;
use crate::vedic::rashi::Sign;

pub const VARNA_MAX: f64 = 1.0;
pub const VASHYA_MAX: f64 = 2.0;
pub const TARA_MAX: f64 = 3.0;
pub const YONI_MAX: f64 = 4.0;
pub const GRAHA_MAITRI_MAX: f64 = 5.0;
pub const GANA_MAX: f64 = 6.0;
pub const BHAKOOTA_MAX: f64 = 7.0;
pub const NADI_MAX: f64 = 8.0;
pub const TOTAL_MAX: f64 = 36.0;

/// Sign distances (counted inclusively) that earn full bhakoota points.
const AUSPICIOUS_DISTANCES: [usize; 6] = [1, 3, 4, 7, 10, 11];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AshtakootaScore {
    pub varna: f64,
    pub vashya: f64,
    pub tara: f64,
    pub yoni: f64,
    pub graha_maitri: f64,
    pub gana: f64,
    pub bhakoota: f64,
    pub nadi: f64,
    pub total: f64,
}

impl AshtakootaScore {
    pub fn max() -> f64 {
        TOTAL_MAX
    }

    pub fn percentage(&self) -> f64 {
        self.total / TOTAL_MAX * 100.0
    }

    /// Sub-scores paired with their ceilings, in traditional order.
    pub fn breakdown(&self) -> [(&'static str, f64, f64); 8] {
        [
            ("varna", self.varna, VARNA_MAX),
            ("vashya", self.vashya, VASHYA_MAX),
            ("tara", self.tara, TARA_MAX),
            ("yoni", self.yoni, YONI_MAX),
            ("graha_maitri", self.graha_maitri, GRAHA_MAITRI_MAX),
            ("gana", self.gana, GANA_MAX),
            ("bhakoota", self.bhakoota, BHAKOOTA_MAX),
            ("nadi", self.nadi, NADI_MAX),
        ]
    }
}

pub fn varna_koota(groom: Varna, bride: Varna) -> f64 {
    if groom.code() >= bride.code() {
        VARNA_MAX
    } else {
        0.0
    }
}

pub fn vashya_koota(groom: Vashya, bride: Vashya) -> f64 {
    VASHYA_TABLE[groom.index()][bride.index()]
}

pub fn tara_koota(groom_tara: u8, bride_tara: u8) -> f64 {
    match (is_malefic_tara(groom_tara), is_malefic_tara(bride_tara)) {
        (true, true) => 0.0,
        (false, false) => TARA_MAX,
        _ => TARA_MAX / 2.0,
    }
}

pub fn yoni_koota(groom: Yoni, bride: Yoni) -> f64 {
    f64::from(YONI_TABLE[groom.index()][bride.index()])
}

pub fn graha_maitri_koota(groom: Graha, bride: Graha) -> f64 {
    maitri_points(relation(groom, bride), relation(bride, groom))
}

pub fn gana_koota(groom: Gana, bride: Gana) -> f64 {
    match (groom, bride) {
        (g, b) if g == b => GANA_MAX,
        (Gana::Deva, Gana::Manushya) => GANA_MAX,
        (Gana::Manushya, Gana::Deva) => 5.0,
        (Gana::Rakshasa, Gana::Deva) => 1.0,
        _ => 0.0,
    }
}

/// Inclusive distance between two signs, `|a - b| + 1`.
pub fn sign_distance(a: Sign, b: Sign) -> usize {
    a.number().abs_diff(b.number()) + 1
}

pub fn bhakoota_koota(groom: Sign, bride: Sign) -> f64 {
    if AUSPICIOUS_DISTANCES.contains(&sign_distance(groom, bride)) {
        BHAKOOTA_MAX
    } else {
        0.0
    }
}

pub fn nadi_koota(groom: Nadi, bride: Nadi) -> f64 {
    if groom == bride {
        0.0
    } else {
        NADI_MAX
    }
}

/// Score a groom's profile against a bride's.
pub fn score(groom: &CompatibilityProfile, bride: &CompatibilityProfile) -> AshtakootaScore {
    let mut result = AshtakootaScore {
        varna: varna_koota(groom.varna, bride.varna),
        vashya: vashya_koota(groom.vashya, bride.vashya),
        tara: tara_koota(groom.tara, bride.tara),
        yoni: yoni_koota(groom.yoni, bride.yoni),
        graha_maitri: graha_maitri_koota(groom.graha_maitri, bride.graha_maitri),
        gana: gana_koota(groom.gana, bride.gana),
        bhakoota: bhakoota_koota(groom.bhakoota, bride.bhakoota),
        nadi: nadi_koota(groom.nadi, bride.nadi),
        total: 0.0,
    };
    result.total = result.breakdown().iter().map(|(_, points, _)| points).sum();
    result
}

/// Derive both Moon profiles and score them.
pub fn score_charts(groom: &Chart, bride: &Chart) -> AshtakootaScore {
    let result = score(&groom.profile(), &bride.profile());
    log::debug!(
        "ashtakoota {} ({}) x {} ({}) = {}",
        groom.moon_sign,
        groom.nakshatra,
        bride.moon_sign,
        bride.nakshatra,
        result.total
    );
    result
}
