pub mod ashtakoota;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod geocode;
pub mod matching;
pub mod service;
pub mod vedic;

pub use ashtakoota::{score, score_charts, AshtakootaScore};
pub use chart::{BirthMoment, BodyPlacement, Chart, ChartEngine};
pub use ephemeris::{
    Ayanamsa, Body, EphemerisSettings, EphemerisSource, GeoCoordinate, PositionProvider,
    SwissEphemerisAdapter,
};
pub use error::{KundaliError, Result};
pub use geocode::{resolve_or_default, Geocoder, ResolvedLocation, StaticGeocoder, DEFAULT_COORDINATE};
pub use matching::{find_matches, find_matches_for_chart, MatchCandidate, Role};
pub use service::{BirthDetails, ChartReport, KundaliService, ServiceDefaults};
pub use vedic::{generate_profile, CompatibilityProfile, Nakshatra, Sign};
