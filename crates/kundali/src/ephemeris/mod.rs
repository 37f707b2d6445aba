pub mod adapter;
pub mod ayanamsa;
pub mod provider;
pub mod topocentric;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use ayanamsa::Ayanamsa;
pub use provider::PositionProvider;
pub use types::{
    Body, EphemerisSettings, EphemerisSource, GeoCoordinate, ALL_BODIES, DEFAULT_ALTITUDE_M,
};
