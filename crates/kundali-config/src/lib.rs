use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use kundali::ephemeris::DEFAULT_ALTITUDE_M;
use kundali::service::{DEFAULT_BIRTH_PLACE, DEFAULT_UTC_OFFSET_HOURS};
use kundali::{
    Ayanamsa, EphemerisSettings, EphemerisSource, GeoCoordinate, ServiceDefaults,
    StaticGeocoder, DEFAULT_COORDINATE,
};

/// Relative locations tried when no explicit path is given.
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["configs/kundali.toml", "../../configs/kundali.toml"];

#[derive(Debug, Clone)]
pub struct KundaliConfig {
    pub ephemeris: EphemerisSettings,
    pub defaults: ServiceDefaults,
    pub birth_place: String,
    pub places: BTreeMap<String, GeoCoordinate>,
}

impl Default for KundaliConfig {
    fn default() -> Self {
        Self {
            ephemeris: EphemerisSettings::default(),
            defaults: ServiceDefaults::default(),
            birth_place: DEFAULT_BIRTH_PLACE.to_string(),
            places: BTreeMap::new(),
        }
    }
}

impl KundaliConfig {
    /// Gazetteer built from `[places]`.
    pub fn geocoder(&self) -> StaticGeocoder {
        self.places
            .iter()
            .map(|(name, coordinate)| (name.as_str(), *coordinate))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default)]
    ayanamsa: Option<String>,
    #[serde(default)]
    topocentric: Option<bool>,
    #[serde(default)]
    altitude_m: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsToml {
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    utc_offset_hours: Option<f64>,
    #[serde(default)]
    birth_place: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct PlaceToml {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    defaults: DefaultsToml,
    #[serde(default)]
    places: BTreeMap<String, PlaceToml>,
}

/// First existing file among the search paths.
pub fn find_config_path() -> Option<PathBuf> {
    CONFIG_SEARCH_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Load from `path`, or from the search paths. A missing default file is
/// not an error; an explicit path that cannot be read is.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<KundaliConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match find_config_path() {
            Some(p) => p,
            None => return Ok(KundaliConfig::default()),
        },
    };
    let text = fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    parse_config(&text).map_err(|e| anyhow::anyhow!("{}: {e:#}", path.display()))
}

pub fn parse_config(text: &str) -> anyhow::Result<KundaliConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse kundali.toml: {e}"))?;
    let RootConfigToml {
        ephemeris,
        defaults,
        places,
    } = root;

    let ephemeris = resolve_ephemeris(ephemeris)?;

    let coordinate = GeoCoordinate::new(
        defaults.latitude.unwrap_or(DEFAULT_COORDINATE.latitude),
        defaults.longitude.unwrap_or(DEFAULT_COORDINATE.longitude),
    );
    validate_coordinate("defaults", &coordinate)?;

    let utc_offset_hours = defaults.utc_offset_hours.unwrap_or(DEFAULT_UTC_OFFSET_HOURS);
    if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > kundali::chart::MAX_UTC_OFFSET_HOURS {
        anyhow::bail!("defaults.utc_offset_hours must be within [-14, 14], got {utc_offset_hours}");
    }

    let mut gazetteer = BTreeMap::new();
    for (name, place) in places {
        let coordinate = GeoCoordinate::new(place.latitude, place.longitude);
        validate_coordinate(&format!("places.\"{name}\""), &coordinate)?;
        gazetteer.insert(name, coordinate);
    }

    Ok(KundaliConfig {
        ephemeris,
        defaults: ServiceDefaults {
            coordinate,
            utc_offset_hours,
        },
        birth_place: defaults
            .birth_place
            .unwrap_or_else(|| DEFAULT_BIRTH_PLACE.to_string()),
        places: gazetteer,
    })
}

fn resolve_ephemeris(cfg: EphemerisToml) -> anyhow::Result<EphemerisSettings> {
    let source = match cfg.source.as_deref().map(str::to_lowercase).as_deref() {
        None | Some("moshier") => EphemerisSource::Moshier,
        Some("swiss") => EphemerisSource::Swiss,
        Some(other) => {
            anyhow::bail!("ephemeris.source must be \"moshier\" or \"swiss\", got {other:?}")
        }
    };
    if source == EphemerisSource::Swiss && cfg.path.is_none() {
        anyhow::bail!("ephemeris.path is required when ephemeris.source = \"swiss\"");
    }

    let ayanamsa = match cfg.ayanamsa {
        Some(name) => name
            .parse::<Ayanamsa>()
            .map_err(|e| anyhow::anyhow!("ephemeris.ayanamsa: {e}"))?,
        None => Ayanamsa::default(),
    };

    let altitude_m = cfg.altitude_m.unwrap_or(DEFAULT_ALTITUDE_M);
    if !altitude_m.is_finite() {
        anyhow::bail!("ephemeris.altitude_m must be finite");
    }

    Ok(EphemerisSettings {
        source,
        ephemeris_path: cfg.path,
        ayanamsa,
        topocentric: cfg.topocentric.unwrap_or(true),
        altitude_m,
    })
}

fn validate_coordinate(section: &str, c: &GeoCoordinate) -> anyhow::Result<()> {
    if !c.is_valid() {
        anyhow::bail!(
            "{section}: latitude must be within [-90, 90] and longitude within [-180, 180], got {}, {}",
            c.latitude,
            c.longitude
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali::Geocoder;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.ephemeris, EphemerisSettings::default());
        assert_eq!(cfg.defaults.coordinate, DEFAULT_COORDINATE);
        assert_eq!(cfg.defaults.utc_offset_hours, 5.5);
        assert_eq!(cfg.birth_place, "Ahmedabad, Gujarat, India");
        assert!(cfg.places.is_empty());
    }

    #[test]
    fn test_full_config() {
        let cfg = parse_config(
            r#"
            [ephemeris]
            source = "swiss"
            path = "/opt/swisseph"
            ayanamsa = "chitrapaksha"
            topocentric = false
            altitude_m = 10.0

            [defaults]
            latitude = 19.07
            longitude = 72.88
            utc_offset_hours = 5.5
            birth_place = "Mumbai"

            [places]
            "Mumbai" = { latitude = 19.07, longitude = 72.88 }
            "New York" = { latitude = 40.71, longitude = -74.01 }
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ephemeris.source, EphemerisSource::Swiss);
        assert_eq!(cfg.ephemeris.ayanamsa, Ayanamsa::Lahiri);
        assert!(!cfg.ephemeris.topocentric);
        assert_eq!(cfg.ephemeris.ephemeris_path, Some(PathBuf::from("/opt/swisseph")));
        assert_eq!(cfg.birth_place, "Mumbai");
        assert_eq!(
            cfg.geocoder().resolve("new york"),
            Some(GeoCoordinate::new(40.71, -74.01))
        );
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(parse_config("[defaults]\nlatitude = 91.0").is_err());
        assert!(parse_config("[defaults]\nutc_offset_hours = 15.0").is_err());
        assert!(parse_config("[ephemeris]\nayanamsa = \"sassanian\"").is_err());
        assert!(parse_config("[ephemeris]\nsource = \"swiss\"").is_err());
        assert!(parse_config("[ephemeris]\nsource = \"jpl\"").is_err());
        assert!(parse_config("[places]\nX = { latitude = 0.0, longitude = 200.0 }").is_err());
        assert!(parse_config("[ephemeris]\nhouse_system = \"placidus\"").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ephemeris]\nayanamsa = \"raman\"").unwrap();
        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.ephemeris.ayanamsa, Ayanamsa::Raman);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/kundali.toml"))).is_err());
    }
}
