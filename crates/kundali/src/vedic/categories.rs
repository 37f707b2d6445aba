//! Closed classification sets used by Ashtakoota matching, and the fixed
//! tables that assign them from the Moon's sign, degree and nakshatra.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KundaliError;
use crate::vedic::nakshatra::Nakshatra;
use crate::vedic::rashi::Sign;

macro_rules! category {
    ($(#[$meta:meta])* $name:ident, $label:literal { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            /// Zero-based row/column in the scoring tables.
            pub fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = KundaliError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| KundaliError::unknown($label, s))
            }
        }
    };
}

category!(
    /// Social class of the Moon sign, by element.
    Varna, "varna" { Brahmin, Kshatriya, Vaishya, Shudra }
);

category!(
    /// Nature of the Moon sign: quadruped, biped, aquatic, wild, insect.
    /// Declaration order is the row order of the vashya matrix.
    Vashya, "vashya" { Dwipada, Chatushpada, Jalachara, Vanachara, Keeta }
);

category!(
    /// Animal archetype of the Moon's nakshatra.
    /// Declaration order is the row order of the yoni matrix.
    Yoni, "yoni" {
        Ashwa, Gaja, Mesha, Sarpa, Shwana, Marjar, Mushaka,
        Gau, Mahisha, Vyaghra, Mriga, Vanara, Nakula, Simha,
    }
);

category!(
    /// The seven classical planets that rule signs.
    Graha, "planet" { Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn }
);

category!(
    /// Temperament of the Moon's nakshatra.
    Gana, "gana" { Deva, Manushya, Rakshasa }
);

category!(
    /// Constitution of the Moon's nakshatra.
    Nadi, "nadi" { Adi, Madhya, Antya }
);

/// Taras scored as inauspicious (Vipat, Pratyari, Naidhana).
pub const MALEFIC_TARAS: [u8; 3] = [3, 5, 7];

/// Degree splitting the dual-natured signs Capricorn and Sagittarius.
pub const VASHYA_SPLIT_DEGREE: f64 = 15.0;

impl Varna {
    pub fn of_sign(sign: Sign) -> Self {
        match sign {
            Sign::Aries | Sign::Leo | Sign::Sagittarius => Varna::Kshatriya,
            Sign::Taurus | Sign::Virgo | Sign::Capricorn => Varna::Vaishya,
            Sign::Gemini | Sign::Libra | Sign::Aquarius => Varna::Shudra,
            Sign::Cancer | Sign::Scorpio | Sign::Pisces => Varna::Brahmin,
        }
    }

    /// Ordinal comparison key, Brahmin = 1 through Shudra = 4.
    pub fn code(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl Vashya {
    pub fn of_sign(sign: Sign, degree_in_sign: f64) -> Self {
        match sign {
            Sign::Aries | Sign::Taurus => Vashya::Chatushpada,
            Sign::Gemini | Sign::Virgo | Sign::Libra | Sign::Aquarius => Vashya::Dwipada,
            Sign::Cancer | Sign::Pisces => Vashya::Jalachara,
            Sign::Leo => Vashya::Vanachara,
            Sign::Scorpio => Vashya::Keeta,
            Sign::Capricorn if degree_in_sign <= VASHYA_SPLIT_DEGREE => Vashya::Chatushpada,
            Sign::Capricorn => Vashya::Jalachara,
            Sign::Sagittarius if degree_in_sign > VASHYA_SPLIT_DEGREE => Vashya::Chatushpada,
            Sign::Sagittarius => Vashya::Dwipada,
        }
    }
}

impl Yoni {
    pub fn of_nakshatra(nakshatra: Nakshatra) -> Self {
        use Nakshatra::*;
        match nakshatra {
            Ashwini | Shatabhisha => Yoni::Ashwa,
            Bharani | Revati => Yoni::Gaja,
            Krittika | Pushya => Yoni::Mesha,
            Rohini | Mrigashira => Yoni::Sarpa,
            Ardra | Mula => Yoni::Shwana,
            Punarvasu | Ashlesha => Yoni::Marjar,
            Magha | PurvaPhalguni => Yoni::Mushaka,
            UttaraPhalguni | UttaraBhadrapada => Yoni::Gau,
            Hasta | Swati => Yoni::Mahisha,
            Chitra | Visakha => Yoni::Vyaghra,
            Anuradha | Jyeshtha => Yoni::Mriga,
            PurvaAshadha | Shravana => Yoni::Vanara,
            // Nakula's second mansion is Abhijit, which is never a valid input.
            UttaraAshadha => Yoni::Nakula,
            Dhanishta | PurvaBhadrapada => Yoni::Simha,
        }
    }
}

impl Graha {
    /// Traditional ruler of a sign.
    pub fn ruler_of(sign: Sign) -> Self {
        match sign {
            Sign::Aries | Sign::Scorpio => Graha::Mars,
            Sign::Taurus | Sign::Libra => Graha::Venus,
            Sign::Gemini | Sign::Virgo => Graha::Mercury,
            Sign::Cancer => Graha::Moon,
            Sign::Leo => Graha::Sun,
            Sign::Sagittarius | Sign::Pisces => Graha::Jupiter,
            Sign::Capricorn | Sign::Aquarius => Graha::Saturn,
        }
    }
}

impl Gana {
    pub fn of_nakshatra(nakshatra: Nakshatra) -> Self {
        use Nakshatra::*;
        match nakshatra {
            Ashwini | Mrigashira | Punarvasu | Pushya | Hasta | Swati | Anuradha | Shravana
            | Revati => Gana::Deva,
            Bharani | Rohini | Ardra | PurvaPhalguni | UttaraPhalguni | PurvaAshadha
            | UttaraAshadha | PurvaBhadrapada | UttaraBhadrapada => Gana::Manushya,
            Krittika | Ashlesha | Magha | Chitra | Visakha | Jyeshtha | Mula | Dhanishta
            | Shatabhisha => Gana::Rakshasa,
        }
    }
}

impl Nadi {
    pub fn of_nakshatra(nakshatra: Nakshatra) -> Self {
        use Nakshatra::*;
        match nakshatra {
            Ashwini | Ardra | Punarvasu | UttaraPhalguni | Hasta | Jyeshtha | Mula
            | Shatabhisha | PurvaBhadrapada => Nadi::Adi,
            Bharani | Mrigashira | Pushya | PurvaPhalguni | Chitra | Anuradha | PurvaAshadha
            | Dhanishta | UttaraBhadrapada => Nadi::Madhya,
            Krittika | Rohini | Ashlesha | Magha | Swati | Visakha | UttaraAshadha | Shravana
            | Revati => Nadi::Antya,
        }
    }
}

/// Tara (1 to 9) of a nakshatra: its number (Ashwini = 1) taken mod 9, plus one.
pub fn tara_of(nakshatra: Nakshatra) -> u8 {
    ((nakshatra.index() + 1) % 9) as u8 + 1
}

pub fn is_malefic_tara(tara: u8) -> bool {
    MALEFIC_TARAS.contains(&tara)
}
