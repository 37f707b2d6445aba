pub mod categories;
pub mod nakshatra;
pub mod profile;
pub mod rashi;

pub use categories::{tara_of, Gana, Graha, Nadi, Varna, Vashya, Yoni};
pub use nakshatra::{get_nakshatra_for_longitude, Nakshatra, NakshatraMetadata, NAKSHATRA_ORDER};
pub use profile::{generate_profile, CompatibilityProfile};
pub use rashi::{degree_in_sign, normalize_degrees, Sign, SIGN_ORDER};
