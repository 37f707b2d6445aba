//! Reference (rashi, nakshatra) pairings used by the match search.
//!
//! Each mansion appears under the sign that owns it. The nine mansions that
//! straddle a sign boundary appear under both signs.

use crate::vedic::nakshatra::Nakshatra;
use crate::vedic::rashi::Sign;

use Nakshatra as N;
use Sign as S;

/// One reference pairing and the name initials traditionally given to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub sign: Sign,
    pub nakshatra: Nakshatra,
    pub phonetic_hints: &'static [&'static str],
}

const fn entry(
    sign: Sign,
    nakshatra: Nakshatra,
    phonetic_hints: &'static [&'static str],
) -> CatalogueEntry {
    CatalogueEntry {
        sign,
        nakshatra,
        phonetic_hints,
    }
}

const ASHWINI: &[&str] = &["Chu", "Che", "Cho", "La"];
const BHARANI: &[&str] = &["Lee", "Lu", "Le", "Lo"];
const KRITTIKA: &[&str] = &["A", "E", "U", "Ea"];
const ROHINI: &[&str] = &["O", "Va", "Vi", "Vu"];
const MRIGASHIRA: &[&str] = &["Ve", "Vo", "Ka", "Ki"];
const ARDRA: &[&str] = &["Ku", "Gha", "Na", "Cha"];
const PUNARVASU: &[&str] = &["Ke", "Ko", "Ha", "Hi"];
const PUSHYA: &[&str] = &["Hu", "He", "Ho", "Da"];
const ASHLESHA: &[&str] = &["De", "Du", "Dee", "Do"];
const MAGHA: &[&str] = &["Ma", "Mi", "Mu", "Me"];
const PURVA_PHALGUNI: &[&str] = &["Mo", "Ta", "Ti", "Tu"];
const UTTARA_PHALGUNI: &[&str] = &["Te", "To", "Pa", "Pi"];
const HASTA: &[&str] = &["Pu", "Sha", "Na", "Tha"];
const CHITRA: &[&str] = &["Pe", "Po", "Ra", "Re"];
const SWATI: &[&str] = &["Ru", "Re", "Ro", "Ta"];
const VISAKHA: &[&str] = &["Ti", "Tu", "Te", "To"];
const ANURADHA: &[&str] = &["Na", "Ni", "Nu", "Ne"];
const JYESHTHA: &[&str] = &["No", "Ya", "Yi", "Yu"];
const MULA: &[&str] = &["Ye", "Yo", "Ba", "Be"];
const PURVA_ASHADHA: &[&str] = &["Bhu", "Dha", "Pha", "Dha"];
const UTTARA_ASHADHA: &[&str] = &["Bhe", "Bo", "Ja", "Ji"];
const SHRAVANA: &[&str] = &["Ju", "Je", "Jo", "Gha"];
const DHANISHTA: &[&str] = &["Ga", "Gi", "Gu", "Ge"];
const SHATABHISHA: &[&str] = &["Go", "Sa", "Si", "Su"];
const PURVA_BHADRAPADA: &[&str] = &["Se", "So", "Da", "Di"];
const UTTARA_BHADRAPADA: &[&str] = &["Du", "Tha", "Jha", "Da"];
const REVATI: &[&str] = &["De", "Do", "Cha", "Chi"];

pub const CATALOGUE: [CatalogueEntry; 36] = [
    entry(S::Aries, N::Ashwini, ASHWINI),
    entry(S::Aries, N::Bharani, BHARANI),
    entry(S::Aries, N::Krittika, KRITTIKA),
    entry(S::Taurus, N::Krittika, KRITTIKA),
    entry(S::Taurus, N::Rohini, ROHINI),
    entry(S::Taurus, N::Mrigashira, MRIGASHIRA),
    entry(S::Gemini, N::Mrigashira, MRIGASHIRA),
    entry(S::Gemini, N::Ardra, ARDRA),
    entry(S::Gemini, N::Punarvasu, PUNARVASU),
    entry(S::Cancer, N::Punarvasu, PUNARVASU),
    entry(S::Cancer, N::Pushya, PUSHYA),
    entry(S::Cancer, N::Ashlesha, ASHLESHA),
    entry(S::Leo, N::Magha, MAGHA),
    entry(S::Leo, N::PurvaPhalguni, PURVA_PHALGUNI),
    entry(S::Leo, N::UttaraPhalguni, UTTARA_PHALGUNI),
    entry(S::Virgo, N::UttaraPhalguni, UTTARA_PHALGUNI),
    entry(S::Virgo, N::Hasta, HASTA),
    entry(S::Virgo, N::Chitra, CHITRA),
    entry(S::Libra, N::Chitra, CHITRA),
    entry(S::Libra, N::Swati, SWATI),
    entry(S::Libra, N::Visakha, VISAKHA),
    entry(S::Scorpio, N::Visakha, VISAKHA),
    entry(S::Scorpio, N::Anuradha, ANURADHA),
    entry(S::Scorpio, N::Jyeshtha, JYESHTHA),
    entry(S::Sagittarius, N::Mula, MULA),
    entry(S::Sagittarius, N::PurvaAshadha, PURVA_ASHADHA),
    entry(S::Sagittarius, N::UttaraAshadha, UTTARA_ASHADHA),
    entry(S::Capricorn, N::UttaraAshadha, UTTARA_ASHADHA),
    entry(S::Capricorn, N::Shravana, SHRAVANA),
    entry(S::Capricorn, N::Dhanishta, DHANISHTA),
    entry(S::Aquarius, N::Dhanishta, DHANISHTA),
    entry(S::Aquarius, N::Shatabhisha, SHATABHISHA),
    entry(S::Aquarius, N::PurvaBhadrapada, PURVA_BHADRAPADA),
    entry(S::Pisces, N::PurvaBhadrapada, PURVA_BHADRAPADA),
    entry(S::Pisces, N::UttaraBhadrapada, UTTARA_BHADRAPADA),
    entry(S::Pisces, N::Revati, REVATI),
];
