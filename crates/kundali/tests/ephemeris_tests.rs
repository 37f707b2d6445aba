use approx::assert_abs_diff_eq;
use kundali::ephemeris::ayanamsa::J2000_JD;
use kundali::{
    Ayanamsa, BirthMoment, Body, ChartEngine, EphemerisSettings, GeoCoordinate, PositionProvider,
    SwissEphemerisAdapter,
};

fn ahmedabad() -> GeoCoordinate {
    GeoCoordinate::new(23.03, 72.62)
}

#[test]
fn test_lahiri_settings_by_default() {
    let settings = EphemerisSettings::default();
    assert_eq!(settings.ayanamsa, Ayanamsa::Lahiri);
    assert!(settings.topocentric);
    assert_abs_diff_eq!(Ayanamsa::Lahiri.degrees_at(J2000_JD), 23.853, epsilon = 1e-12);
}

#[test]
#[ignore] // Needs the Swiss Ephemeris C library at runtime
fn test_sun_at_j2000() {
    let adapter = SwissEphemerisAdapter::new(EphemerisSettings {
        topocentric: false,
        ..EphemerisSettings::default()
    })
    .unwrap();
    // Apparent tropical Sun at J2000.0 is about 280.37 degrees
    let sun = adapter.body_longitude(J2000_JD, Body::Sun, &ahmedabad()).unwrap();
    assert_abs_diff_eq!(sun, 280.37 - 23.853, epsilon = 0.05);
}

#[test]
#[ignore] // Needs the Swiss Ephemeris C library at runtime
fn test_topocentric_moon_differs_from_geocentric() {
    let geo = SwissEphemerisAdapter::new(EphemerisSettings {
        topocentric: false,
        ..EphemerisSettings::default()
    })
    .unwrap();
    let topo = SwissEphemerisAdapter::new(EphemerisSettings::default()).unwrap();
    let jd = 2_460_000.5;
    let a = geo.body_longitude(jd, Body::Moon, &ahmedabad()).unwrap();
    let b = topo.body_longitude(jd, Body::Moon, &ahmedabad()).unwrap();
    let diff = (a - b).abs();
    assert!(diff > 1e-4 && diff < 1.1, "{diff}");
}

#[test]
#[ignore] // Needs the Swiss Ephemeris C library at runtime
fn test_full_chart_with_swiss_adapter() {
    let adapter = SwissEphemerisAdapter::new(EphemerisSettings::default()).unwrap();
    let moment = BirthMoment::new(1990, 5, 17, 14, 45, 0, 5.5).unwrap();
    let chart = ChartEngine::new(adapter).compute(&moment, ahmedabad()).unwrap();

    assert_eq!(chart.bodies.len(), 9);
    let rahu = chart.body(Body::Rahu).unwrap().longitude;
    let ketu = chart.body(Body::Ketu).unwrap().longitude;
    assert_abs_diff_eq!(ketu, (rahu + 180.0) % 360.0, epsilon = 1e-9);
    for placement in chart.bodies.values() {
        assert!((0.0..360.0).contains(&placement.longitude));
        assert!((1..=12).contains(&placement.house));
    }
}
