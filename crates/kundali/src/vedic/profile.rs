//! Ashtakoota compatibility profile derived from the Moon's placement.

use serde::{Deserialize, Serialize};

use crate::error::{KundaliError, Result};
use crate::vedic::categories::{tara_of, Gana, Graha, Nadi, Varna, Vashya, Yoni};
use crate::vedic::nakshatra::Nakshatra;
use crate::vedic::rashi::Sign;

/// The eight koota attributes of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityProfile {
    #[serde(rename = "moon_zodiac")]
    pub moon_sign: Sign,
    pub nakshatra: Nakshatra,
    pub varna: Varna,
    pub vashya: Vashya,
    pub tara: u8,
    pub yoni: Yoni,
    pub graha_maitri: Graha,
    pub gana: Gana,
    pub bhakoota: Sign,
    pub nadi: Nadi,
}

impl CompatibilityProfile {
    pub fn from_moon(moon_sign: Sign, moon_degree_in_sign: f64, nakshatra: Nakshatra) -> Self {
        Self {
            moon_sign,
            nakshatra,
            varna: Varna::of_sign(moon_sign),
            vashya: Vashya::of_sign(moon_sign, moon_degree_in_sign),
            tara: tara_of(nakshatra),
            yoni: Yoni::of_nakshatra(nakshatra),
            graha_maitri: Graha::ruler_of(moon_sign),
            gana: Gana::of_nakshatra(nakshatra),
            bhakoota: moon_sign,
            nadi: Nadi::of_nakshatra(nakshatra),
        }
    }
}

/// Build a profile from sign and nakshatra names.
///
/// Fails with `UnknownCategory` when either name is outside the fixed tables,
/// or when the degree is not within `[0, 30)`.
pub fn generate_profile(
    moon_sign: &str,
    moon_degree_in_sign: f64,
    nakshatra: &str,
) -> Result<CompatibilityProfile> {
    if !(0.0..30.0).contains(&moon_degree_in_sign) {
        return Err(KundaliError::unknown("degree in sign", &moon_degree_in_sign.to_string()));
    }
    let sign: Sign = moon_sign.parse()?;
    let nakshatra: Nakshatra = nakshatra.parse()?;
    Ok(CompatibilityProfile::from_moon(sign, moon_degree_in_sign, nakshatra))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aries_ashwini_profile() {
        let profile = generate_profile("Aries", 5.0, "Ashwini").unwrap();
        assert_eq!(profile.varna, Varna::Kshatriya);
        assert_eq!(profile.vashya, Vashya::Chatushpada);
        assert_eq!(profile.tara, 2);
        assert_eq!(profile.yoni, Yoni::Ashwa);
        assert_eq!(profile.graha_maitri, Graha::Mars);
        assert_eq!(profile.gana, Gana::Deva);
        assert_eq!(profile.bhakoota, Sign::Aries);
        assert_eq!(profile.nadi, Nadi::Adi);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate_profile("Capricorn", 15.0, "Shravana").unwrap();
        let b = generate_profile("Capricorn", 15.0, "Shravana").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.vashya, Vashya::Chatushpada);
    }

    #[test]
    fn test_unknown_inputs_fail_loudly() {
        assert!(matches!(
            generate_profile("Ophiuchus", 5.0, "Ashwini"),
            Err(KundaliError::UnknownCategory { category: "sign", .. })
        ));
        assert!(matches!(
            generate_profile("Capricorn", 5.0, "Abhijit"),
            Err(KundaliError::UnknownCategory { category: "nakshatra", .. })
        ));
    }

    #[test]
    fn test_degree_outside_sign_is_rejected() {
        for degree in [f64::NAN, -0.5, 30.0, 45.0] {
            assert!(matches!(
                generate_profile("Capricorn", degree, "Shravana"),
                Err(KundaliError::UnknownCategory { category: "degree in sign", .. })
            ));
        }
        assert!(generate_profile("Capricorn", 0.0, "Shravana").is_ok());
        assert!(generate_profile("Capricorn", 29.999, "Shravana").is_ok());
    }

    #[test]
    fn test_profile_serialization_names() {
        let profile = generate_profile("Libra", 20.0, "Visakha").unwrap();
        let value = serde_json::to_value(profile).unwrap();
        assert_eq!(value["moon_zodiac"], "Libra");
        assert_eq!(value["nakshatra"], "Visakha");
        assert_eq!(value["graha_maitri"], "Venus");
        assert_eq!(value["tara"], 8);
    }
}
