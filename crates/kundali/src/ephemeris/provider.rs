use crate::ephemeris::types::{Body, GeoCoordinate};
use crate::error::Result;

/// Source of sidereal ecliptic positions for a chart.
///
/// Implementations return degrees normalized to [0, 360). Ketu is always
/// derived from Rahu by the caller, so providers are never asked for it.
pub trait PositionProvider {
    /// Sidereal longitude of `body` at Julian Day `jd` (UT) as seen from
    /// `observer`.
    fn body_longitude(&self, jd: f64, body: Body, observer: &GeoCoordinate) -> Result<f64>;

    /// Sidereal longitude of the ascendant at `jd` for `observer`.
    fn ascendant_longitude(&self, jd: f64, observer: &GeoCoordinate) -> Result<f64>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn body_longitude(&self, jd: f64, body: Body, observer: &GeoCoordinate) -> Result<f64> {
        (**self).body_longitude(jd, body, observer)
    }

    fn ascendant_longitude(&self, jd: f64, observer: &GeoCoordinate) -> Result<f64> {
        (**self).ascendant_longitude(jd, observer)
    }
}
