use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};
use swisseph::AscMc;

use crate::ephemeris::provider::PositionProvider;
use crate::ephemeris::topocentric::apply_parallax;
use crate::ephemeris::types::{Body, EphemerisSettings, EphemerisSource, GeoCoordinate};
use crate::error::{KundaliError, Result};
use crate::vedic::rashi::normalize_degrees;

/// Environment variable consulted for the data directory when the settings
/// name none.
const EPHE_PATH_VAR: &str = "SE_EPHE_PATH";
/// Bit set in `calc_ut`'s return flags when the `.se1` files were used.
const SWIEPH_FLAG: i32 = 2;
const WHOLE_SIGN: u8 = b'W';

/// The Swiss C library keeps its state in process globals, so every call
/// into it is serialized through this lock.
static SWISS_LOCK: Mutex<()> = Mutex::new(());

/// Held for the duration of one computation; releasing it on drop frees the
/// library for the next caller whether the computation succeeded or not.
struct ComputationHandle {
    _guard: MutexGuard<'static, ()>,
}

impl ComputationHandle {
    fn acquire() -> Self {
        // A panic inside another computation leaves no partial state we
        // depend on, so a poisoned lock is still usable.
        let guard = SWISS_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        Self { _guard: guard }
    }
}

/// Swiss Ephemeris backed position provider.
///
/// Positions are queried tropical and geocentric, then shifted to the
/// observer and to the sidereal zodiac with the configured ayanamsa.
#[derive(Debug, Clone)]
pub struct SwissEphemerisAdapter {
    settings: EphemerisSettings,
    /// Data directory handed to the library before every Swiss computation.
    data_path: Option<String>,
}

impl SwissEphemerisAdapter {
    pub fn new(settings: EphemerisSettings) -> Result<Self> {
        let data_path = match settings.source {
            EphemerisSource::Moshier => None,
            EphemerisSource::Swiss => Some(resolve_data_path(&settings)?),
        };
        Ok(Self {
            settings,
            data_path,
        })
    }

    pub fn settings(&self) -> &EphemerisSettings {
        &self.settings
    }

    pub fn data_path(&self) -> Option<&str> {
        self.data_path.as_deref()
    }

    fn flags(&self) -> u32 {
        self.settings.source.flag() as u32
    }

    fn to_sidereal(&self, jd: f64, tropical: f64) -> f64 {
        normalize_degrees(tropical - self.settings.ayanamsa.degrees_at(jd))
    }

    /// Tropical geocentric (longitude, latitude, distance in AU).
    fn tropical_position(&self, jd: f64, code: i32, target: Body) -> Result<(f64, f64, f64)> {
        let _handle = ComputationHandle::acquire();
        // The library's data path is per-thread state, so it is set again
        // under the handle for every computation.
        if let Some(path) = &self.data_path {
            set_ephe_path(path);
        }
        let result = calc_ut(jd, code as u32, self.flags()).map_err(|e| {
            KundaliError::unavailable(target.name(), format!("Swiss Ephemeris error: {}", e))
        })?;
        check_source(self.settings.source, result.code, target)?;
        let out = result.out;
        Ok((out[0], out[1], out[2]))
    }
}

/// Data directory for the Swiss source: from the settings, else the
/// environment. It must exist and be passable to the C library.
fn resolve_data_path(settings: &EphemerisSettings) -> Result<String> {
    let path = settings
        .ephemeris_path
        .clone()
        .or_else(|| env::var(EPHE_PATH_VAR).ok().map(PathBuf::from))
        .ok_or_else(|| {
            KundaliError::unavailable(
                "ephemeris",
                "Swiss ephemeris source selected but no data path was given",
            )
        })?;

    if !path.exists() {
        return Err(KundaliError::unavailable(
            "ephemeris",
            format!(
                "Ephemeris path does not exist: {}. Please ensure Swiss Ephemeris data files are installed.",
                path.display()
            ),
        ));
    }

    let text = path
        .to_str()
        .filter(|p| !p.contains('\0'))
        .ok_or_else(|| {
            KundaliError::unavailable(
                "ephemeris",
                format!("Ephemeris path is not valid UTF-8 text: {}", path.display()),
            )
        })?;
    log::debug!("swiss ephemeris data path {text}");
    Ok(text.to_string())
}

/// The library quietly drops to its analytical theory when data files are
/// missing; with the Swiss source selected that is a failure.
fn check_source(source: EphemerisSource, returned_flags: i32, target: Body) -> Result<()> {
    if source == EphemerisSource::Swiss && returned_flags & SWIEPH_FLAG == 0 {
        return Err(KundaliError::unavailable(
            target.name(),
            "Swiss Ephemeris data files not found for this date; refusing the Moshier fallback",
        ));
    }
    Ok(())
}

impl PositionProvider for SwissEphemerisAdapter {
    fn body_longitude(&self, jd: f64, body: Body, observer: &GeoCoordinate) -> Result<f64> {
        if !jd.is_finite() {
            return Err(KundaliError::unavailable(body.name(), "Julian Day is not finite"));
        }
        let code = body.swiss_id().ok_or_else(|| {
            KundaliError::unavailable(body.name(), "derived from rahu, not queried directly")
        })?;

        let (mut lon, lat, dist) = self.tropical_position(jd, code, body)?;
        if !lon.is_finite() {
            return Err(KundaliError::unavailable(body.name(), "non-finite longitude"));
        }

        // Nodes are geometric points without a distance of their own.
        if self.settings.topocentric && !body.is_node() {
            lon = apply_parallax(lon, lat, dist, jd, observer, self.settings.altitude_m).0;
        }

        let sidereal = self.to_sidereal(jd, lon);
        log::debug!("{body} tropical {lon:.6} sidereal {sidereal:.6}");
        Ok(sidereal)
    }

    fn ascendant_longitude(&self, jd: f64, observer: &GeoCoordinate) -> Result<f64> {
        if !jd.is_finite() || !observer.is_valid() {
            return Err(KundaliError::unavailable(
                "ascendant",
                format!(
                    "invalid input jd={jd} lat={} lon={}",
                    observer.latitude, observer.longitude
                ),
            ));
        }

        let (_cusps, ascmc) = {
            let _handle = ComputationHandle::acquire();
            houses_ex(
                jd,
                0,
                observer.latitude,
                observer.longitude,
                WHOLE_SIGN as i32,
            )
        };
        let tropical = AscMc::from_array(ascmc).ascendant;
        if !tropical.is_finite() {
            return Err(KundaliError::unavailable(
                "ascendant",
                "house calculation returned a non-finite ascendant",
            ));
        }

        let sidereal = self.to_sidereal(jd, tropical);
        log::debug!("ascendant tropical {tropical:.6} sidereal {sidereal:.6}");
        Ok(sidereal)
    }
}
