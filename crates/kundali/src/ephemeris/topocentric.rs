//! Parallax correction from geocentric to topocentric ecliptic coordinates.
//!
//! Follows the ecliptic parallax formulae (Meeus, Astronomical Algorithms,
//! ch. 40). Only the Moon moves by a visible amount; for the planets the
//! shift is a few arcseconds at most.

use crate::ephemeris::ayanamsa::{DAYS_PER_CENTURY, J2000_JD};
use crate::ephemeris::types::GeoCoordinate;
use crate::vedic::rashi::normalize_degrees;

pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;
pub const AU_KM: f64 = 149_597_870.7;
/// Polar over equatorial radius of the IAU 1976 ellipsoid.
const EARTH_FLATTENING_RATIO: f64 = 0.996_647_19;

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let arcsec = 84_381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    arcsec / 3600.0
}

/// Greenwich mean sidereal time in degrees, [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_degrees(theta)
}

/// Local mean sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east: f64) -> f64 {
    normalize_degrees(gmst_deg(jd_ut) + longitude_east)
}

/// Observer's geocentric position terms (ρ sin φ', ρ cos φ').
pub fn observer_terms(latitude: f64, altitude_m: f64) -> (f64, f64) {
    let phi = latitude.to_radians();
    let u = (EARTH_FLATTENING_RATIO * phi.tan()).atan();
    let h = altitude_m / (EARTH_EQUATORIAL_RADIUS_KM * 1000.0);
    let rho_sin = EARTH_FLATTENING_RATIO * u.sin() + h * phi.sin();
    let rho_cos = u.cos() + h * phi.cos();
    (rho_sin, rho_cos)
}

/// Shift a geocentric ecliptic position (degrees, distance in AU) to the
/// observer's location. Returns the topocentric `(longitude, latitude)`.
pub fn apply_parallax(
    longitude: f64,
    latitude: f64,
    distance_au: f64,
    jd_ut: f64,
    observer: &GeoCoordinate,
    altitude_m: f64,
) -> (f64, f64) {
    if distance_au <= 0.0 {
        return (longitude, latitude);
    }
    let sin_pi = EARTH_EQUATORIAL_RADIUS_KM / (distance_au * AU_KM);
    let (s, c) = observer_terms(observer.latitude, altitude_m);
    let eps = mean_obliquity_deg(jd_ut).to_radians();
    let theta = local_sidereal_time_deg(jd_ut, observer.longitude).to_radians();
    let lam = longitude.to_radians();
    let beta = latitude.to_radians();

    let n = lam.cos() * beta.cos() - c * sin_pi * theta.cos();
    let lam_topo = (lam.sin() * beta.cos()
        - sin_pi * (s * eps.sin() + c * eps.cos() * theta.sin()))
    .atan2(n);
    let beta_topo = (lam_topo.cos()
        * (beta.sin() - sin_pi * (s * eps.cos() - c * eps.sin() * theta.sin()))
        / n)
        .atan();

    (normalize_degrees(lam_topo.to_degrees()), beta_topo.to_degrees())
}
