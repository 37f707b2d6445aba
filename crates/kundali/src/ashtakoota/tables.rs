//! Fixed koota tables. Rows are indexed by the groom's category and
//! columns by the bride's, in the declaration order of each enum.

use serde::{Deserialize, Serialize};

use crate::vedic::categories::Graha;

/// Vashya points, Dwipada / Chatushpada / Jalachara / Vanachara / Keeta.
pub const VASHYA_TABLE: [[f64; 5]; 5] = [
    [2.0, 0.0, 0.0, 0.5, 0.0],
    [1.0, 2.0, 1.0, 0.5, 1.0],
    [0.5, 1.0, 2.0, 1.0, 1.0],
    [0.0, 0.0, 0.0, 2.0, 0.0],
    [1.0, 1.0, 1.0, 0.0, 2.0],
];

/// Yoni points, Ashwa through Simha.
pub const YONI_TABLE: [[u8; 14]; 14] = [
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 1, 3, 2, 1],
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0],
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1],
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2],
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1],
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1],
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2],
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1],
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 2],
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1],
    [1, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1],
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2],
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2],
    [1, 0, 1, 2, 1, 1, 2, 1, 2, 1, 1, 2, 2, 4],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

use Relation::{Enemy as E, Friend as F, Neutral as N};

/// Natural friendship, Sun / Moon / Mars / Mercury / Jupiter / Venus / Saturn.
/// Row is the planet judging, column the planet judged.
const FRIENDSHIP: [[Relation; 7]; 7] = [
    [F, F, F, N, F, E, E],
    [F, F, N, F, N, N, N],
    [F, F, F, E, F, N, N],
    [F, E, N, F, N, F, N],
    [F, F, F, E, F, E, N],
    [E, E, N, F, N, F, F],
    [E, E, E, F, N, F, F],
];

/// How `from` regards `to`.
pub fn relation(from: Graha, to: Graha) -> Relation {
    FRIENDSHIP[from.index()][to.index()]
}

/// Points for an unordered pair of directional relations.
pub fn maitri_points(a: Relation, b: Relation) -> f64 {
    match (a, b) {
        (F, F) => 5.0,
        (F, N) | (N, F) => 4.0,
        (N, N) => 3.0,
        (F, E) | (E, F) => 1.0,
        (N, E) | (E, N) => 0.5,
        (E, E) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planets_are_their_own_friends() {
        for g in Graha::ALL {
            assert_eq!(relation(*g, *g), Relation::Friend, "{g}");
        }
    }

    #[test]
    fn test_friendship_samples() {
        assert_eq!(relation(Graha::Sun, Graha::Saturn), Relation::Enemy);
        assert_eq!(relation(Graha::Saturn, Graha::Sun), Relation::Enemy);
        assert_eq!(relation(Graha::Moon, Graha::Mars), Relation::Neutral);
        assert_eq!(relation(Graha::Mars, Graha::Mercury), Relation::Enemy);
        assert_eq!(relation(Graha::Mercury, Graha::Mars), Relation::Neutral);
        assert_eq!(relation(Graha::Venus, Graha::Saturn), Relation::Friend);
    }

    #[test]
    fn test_moon_has_no_enemies() {
        assert!(Graha::ALL.iter().all(|g| relation(Graha::Moon, *g) != Relation::Enemy));
    }

    #[test]
    fn test_tables_respect_maxima() {
        assert!(VASHYA_TABLE.iter().flatten().all(|p| *p <= 2.0));
        assert!(YONI_TABLE.iter().flatten().all(|p| *p <= 4));
        for i in 0..14 {
            assert_eq!(YONI_TABLE[i][i], 4);
        }
    }
}
