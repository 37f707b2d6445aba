pub mod catalogue;
pub mod search;

pub use catalogue::{CatalogueEntry, CATALOGUE};
pub use search::{
    find_matches, find_matches_for_chart, MatchCandidate, Role, MATCH_THRESHOLD, REFERENCE_DEGREE,
};
