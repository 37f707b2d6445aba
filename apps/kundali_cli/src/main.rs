use anyhow::Context;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use kundali::{
    generate_profile, AshtakootaScore, BirthDetails, ChartReport, GeoCoordinate, KundaliService,
    MatchCandidate, Role, StaticGeocoder, SwissEphemerisAdapter,
};
use kundali_config::{load_config, KundaliConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sidereal birth charts and Ashtakoota matching")]
struct Args {
    /// Path to kundali.toml (default: configs/kundali.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a natal chart.
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Score a groom's chart against a bride's.
    Score {
        #[arg(long)]
        groom_date: String,
        #[arg(long)]
        groom_time: String,
        #[arg(long, allow_hyphen_values = true)]
        groom_offset: Option<f64>,
        #[arg(long)]
        groom_place: Option<String>,
        #[arg(long)]
        bride_date: String,
        #[arg(long)]
        bride_time: String,
        #[arg(long, allow_hyphen_values = true)]
        bride_offset: Option<f64>,
        #[arg(long)]
        bride_place: Option<String>,
    },
    /// List catalogue pairings that score above the match threshold.
    Matches {
        #[command(flatten)]
        birth: BirthArgs,
        /// Role the chart's owner takes: groom or bride.
        #[arg(long)]
        role: String,
    },
    /// Derive the Ashtakoota profile for a Moon placement.
    Profile {
        #[arg(long)]
        sign: String,
        #[arg(long)]
        degree: f64,
        #[arg(long)]
        nakshatra: String,
    },
}

#[derive(clap::Args, Debug)]
struct BirthArgs {
    /// Local birth date, YYYY-MM-DD.
    #[arg(long)]
    date: String,
    /// Local birth time, HH:MM or HH:MM:SS.
    #[arg(long)]
    time: String,
    /// UTC offset in hours (default from config).
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<f64>,
    /// Birth place name looked up in the configured gazetteer.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    place: Option<String>,
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
}

#[derive(Serialize)]
struct ScoreOutput {
    groom: ChartReport,
    bride: ChartReport,
    #[serde(flatten)]
    score: AshtakootaScore,
    max: f64,
    percentage: f64,
}

#[derive(Serialize)]
struct MatchesOutput {
    role: Role,
    matches: Vec<MatchCandidate>,
}

struct App {
    config: KundaliConfig,
    geocoder: StaticGeocoder,
    service: KundaliService<SwissEphemerisAdapter>,
}

impl App {
    fn new(config: KundaliConfig) -> anyhow::Result<Self> {
        let adapter = SwissEphemerisAdapter::new(config.ephemeris.clone())
            .context("Failed to initialise the ephemeris")?;
        let service = KundaliService::with_defaults(adapter, config.defaults);
        let geocoder = config.geocoder();
        Ok(Self {
            config,
            geocoder,
            service,
        })
    }

    fn chart(
        &self,
        date: &str,
        time: &str,
        offset: Option<f64>,
        place: Option<&str>,
        coordinate: Option<GeoCoordinate>,
    ) -> anyhow::Result<ChartReport> {
        let details = birth_details(date, time, offset, place, &self.config)?;
        let report = match coordinate {
            Some(coordinate) => {
                let moment = details.moment(self.config.defaults.utc_offset_hours)?;
                ChartReport {
                    chart: self.service.chart(&moment, coordinate)?,
                    birth_place: details.birth_place,
                    location: coordinate,
                    degraded_location: false,
                }
            }
            None => self.service.chart_for_place(&details, &self.geocoder)?,
        };
        if report.degraded_location {
            log::warn!(
                "place {:?} not found; chart cast for the default location",
                report.birth_place
            );
        }
        Ok(report)
    }

    fn birth_chart(&self, birth: &BirthArgs) -> anyhow::Result<ChartReport> {
        let coordinate = match (birth.lat, birth.lon) {
            (Some(lat), Some(lon)) => Some(GeoCoordinate::new(lat, lon)),
            _ => None,
        };
        self.chart(
            &birth.date,
            &birth.time,
            birth.offset,
            birth.place.as_deref(),
            coordinate,
        )
    }
}

fn birth_details(
    date: &str,
    time: &str,
    offset: Option<f64>,
    place: Option<&str>,
    config: &KundaliConfig,
) -> anyhow::Result<BirthDetails> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date {date:?}, expected YYYY-MM-DD"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .with_context(|| format!("Invalid time {time:?}, expected HH:MM or HH:MM:SS"))?;
    Ok(BirthDetails {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        hour: time.hour(),
        minute: time.minute(),
        second: time.second(),
        utc_offset_hours: offset,
        birth_place: place.map_or_else(|| config.birth_place.clone(), str::to_string),
    })
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Profile {
            sign,
            degree,
            nakshatra,
        } => print_json(&generate_profile(&sign, degree, &nakshatra)?),
        Command::Chart { birth } => {
            let app = App::new(config)?;
            print_json(&app.birth_chart(&birth)?)
        }
        Command::Score {
            groom_date,
            groom_time,
            groom_offset,
            groom_place,
            bride_date,
            bride_time,
            bride_offset,
            bride_place,
        } => {
            let app = App::new(config)?;
            let groom = app
                .chart(&groom_date, &groom_time, groom_offset, groom_place.as_deref(), None)
                .context("groom chart")?;
            let bride = app
                .chart(&bride_date, &bride_time, bride_offset, bride_place.as_deref(), None)
                .context("bride chart")?;
            let score = app.service.score(&groom.chart, &bride.chart);
            print_json(&ScoreOutput {
                max: AshtakootaScore::max(),
                percentage: score.percentage(),
                score,
                groom,
                bride,
            })
        }
        Command::Matches { birth, role } => {
            let role: Role = role.parse()?;
            let app = App::new(config)?;
            let report = app.birth_chart(&birth)?;
            let matches = app.service.matches(&report.chart, role);
            print_json(&MatchesOutput { role, matches })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_details_parsing() {
        let config = KundaliConfig::default();
        let details = birth_details("1990-05-17", "14:45", Some(5.5), None, &config).unwrap();
        assert_eq!((details.year, details.month, details.day), (1990, 5, 17));
        assert_eq!((details.hour, details.minute, details.second), (14, 45, 0));
        assert_eq!(details.birth_place, "Ahmedabad, Gujarat, India");

        let details = birth_details("1990-05-17", "14:45:30", None, Some("Pune"), &config).unwrap();
        assert_eq!(details.second, 30);
        assert_eq!(details.birth_place, "Pune");

        assert!(birth_details("17/05/1990", "14:45", None, None, &config).is_err());
        assert!(birth_details("1990-05-17", "2pm", None, None, &config).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let args = Args::try_parse_from([
            "kundali", "-vv", "matches", "--date", "1990-05-17", "--time", "14:45", "--lat",
            "-33.9", "--lon", "18.4", "--role", "bride",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Command::Matches { .. }));

        assert!(Args::try_parse_from([
            "kundali", "chart", "--date", "1990-05-17", "--time", "14:45", "--lat", "10.0",
        ])
        .is_err());

        let args = Args::try_parse_from([
            "kundali", "score", "--groom-date", "1990-05-17", "--groom-time", "14:45",
            "--groom-offset", "-4", "--bride-date", "1991-02-03", "--bride-time", "06:10",
            "--bride-offset", "-9.5",
        ])
        .unwrap();
        match args.command {
            Command::Score {
                groom_offset,
                bride_offset,
                ..
            } => {
                assert_eq!(groom_offset, Some(-4.0));
                assert_eq!(bride_offset, Some(-9.5));
            }
            other => panic!("parsed as {other:?}"),
        }
    }
}
