mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use kundli_config::{KundliConfig, OutputFormat};
use kundli_frames::Longitude;
use kundli_jyotish::{compute_chart_with_config, interpret};
use kundli_time::{BirthMoment, JulianDay, jd_to_calendar};
use kundli_vedic_base::{
    AyanamshaSystem, GeoLocation, NodeMode, ayanamsha_deg, deg_to_dms, nakshatra_from_longitude,
    rashi_from_longitude,
};
use log::debug;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "kundli", version, about = "Vedic birth chart calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Birth date and time, optionally in local civil time.
#[derive(Args, Debug, Clone)]
struct MomentArgs {
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Time of day (HH:MM)
    #[arg(long)]
    time: String,
    /// Offset of the given time from UTC, e.g. +05:30
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a birth chart with doshas and interpretation
    Chart {
        #[command(flatten)]
        moment: MomentArgs,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Ayanamsha: lahiri, raman, kp, fagan-bradley
        #[arg(long)]
        ayanamsha: Option<AyanamshaSystem>,
        /// Lunar node: mean or true
        #[arg(long)]
        node: Option<NodeMode>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Config file (default: $KUNDLI_CONFIG or ./kundli.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Ayanamsha for a moment
    Ayanamsha {
        #[command(flatten)]
        moment: MomentArgs,
        /// Ayanamsha system
        #[arg(long, default_value = "lahiri")]
        system: AyanamshaSystem,
    },
    /// Julian Day of a moment, or the calendar date of a Julian Day
    JulianDay {
        #[arg(long, requires = "time", conflicts_with = "jd")]
        date: Option<String>,
        #[arg(long, requires = "date")]
        time: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<String>,
        /// Julian Day to convert back to a calendar date
        #[arg(long)]
        jd: Option<f64>,
    },
}

/// Build a UTC birth moment, converting from local time when an offset is given.
fn birth_moment(date: &str, time: &str, utc_offset: Option<&str>) -> Result<BirthMoment> {
    let Some(offset) = utc_offset else {
        return BirthMoment::from_date_and_time(date, time).context("invalid birth moment");
    };
    let text = format!("{} {} {}", date.trim(), time.trim(), offset.trim());
    let local = DateTime::parse_from_str(&text, "%Y-%m-%d %H:%M %:z")
        .with_context(|| format!("invalid local date/time/offset {text:?}"))?;
    let moment = BirthMoment::try_from(local.with_timezone(&Utc))?;
    debug!("local {local} -> {moment}");
    Ok(moment)
}

impl MomentArgs {
    fn resolve(&self) -> Result<BirthMoment> {
        birth_moment(&self.date, &self.time, self.utc_offset.as_deref())
    }
}

#[derive(Serialize)]
struct ChartReport<'a> {
    chart: &'a kundli_jyotish::Chart,
    interpretation: &'a kundli_jyotish::Interpretation,
}

fn load_config(path: Option<&PathBuf>) -> Result<KundliConfig> {
    match path {
        Some(p) => KundliConfig::load(p).with_context(|| format!("loading {}", p.display())),
        None => kundli_config::discover().context("loading config"),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Chart {
            moment,
            lat,
            lon,
            ayanamsha,
            node,
            json,
            config,
        } => {
            let file = load_config(config.as_ref())?;
            let mut chart_config = file.chart_config();
            if let Some(a) = ayanamsha {
                chart_config.ayanamsha = a;
            }
            if let Some(n) = node {
                chart_config.node_mode = n;
            }
            let moment = moment.resolve()?;
            let location = GeoLocation::new(lat, lon);
            let chart = compute_chart_with_config(moment, location, &chart_config)?;
            let interpretation = interpret(&chart);

            if json || file.output.format == OutputFormat::Json {
                let report = ChartReport {
                    chart: &chart,
                    interpretation: &interpretation,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Birth moment (UTC): {moment}");
                print!("{}", render::chart_text(&chart));
                println!();
                print!("{}", render::interpretation_text(&interpretation));
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(Longitude::new(lon));
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(Longitude::new(lon));
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada), ruler {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada,
                info.ruler().english_name()
            );
        }

        Commands::Ayanamsha { moment, system } => {
            let jd = moment.resolve()?.julian_day();
            let aya = ayanamsha_deg(system, jd);
            println!("{system}: {aya:.6} deg ({})", deg_to_dms(aya));
        }

        Commands::JulianDay {
            date,
            time,
            utc_offset,
            jd,
        } => match (jd, date, time) {
            (Some(jd), _, _) => {
                let (y, m, d) = jd_to_calendar(jd);
                let day = d.floor();
                let minutes = (((d - day) * 1440.0).round() as u32).min(1439);
                println!(
                    "{y:04}-{m:02}-{:02} {:02}:{:02} UTC",
                    day as u32,
                    minutes / 60,
                    minutes % 60
                );
            }
            (None, Some(date), Some(time)) => {
                let moment = birth_moment(&date, &time, utc_offset.as_deref())?;
                let jd: JulianDay = moment.julian_day();
                println!("{:.6}", jd.value());
            }
            _ => bail!("give either --jd or both --date and --time"),
        },
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn utc_moment_without_offset() {
        let m = birth_moment("1990-01-15", "10:30", None).unwrap();
        assert_eq!(m, BirthMoment::new(1990, 1, 15, 10, 30).unwrap());
    }

    #[test]
    fn offset_converts_to_utc() {
        let m = birth_moment("1990-01-15", "16:00", Some("+05:30")).unwrap();
        assert_eq!(m, BirthMoment::new(1990, 1, 15, 10, 30).unwrap());
        let m = birth_moment("1990-01-01", "01:00", Some("+05:30")).unwrap();
        assert_eq!(m, BirthMoment::new(1989, 12, 31, 19, 30).unwrap());
        let m = birth_moment("1990-01-15", "22:00", Some("-05:00")).unwrap();
        assert_eq!(m, BirthMoment::new(1990, 1, 16, 3, 0).unwrap());
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(birth_moment("1990-02-30", "10:30", None).is_err());
        assert!(birth_moment("1990-01-15", "24:00", None).is_err());
        assert!(birth_moment("1990-01-15", "10:30", Some("IST")).is_err());
    }

    #[test]
    fn parses_chart_flags() {
        let cli = Cli::try_parse_from([
            "kundli", "chart", "--date", "1990-01-15", "--time", "10:30", "--lat", "28.6139",
            "--lon", "-77.2", "--ayanamsha", "kp", "--node", "true", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart {
                lon,
                ayanamsha,
                node,
                json,
                ..
            } => {
                assert_eq!(lon, -77.2);
                assert_eq!(ayanamsha, Some(AyanamshaSystem::KP));
                assert_eq!(node, Some(NodeMode::True));
                assert!(json);
            }
            _ => panic!("expected chart command"),
        }
    }

    #[test]
    fn julian_day_requires_input() {
        let cli = Cli::try_parse_from(["kundli", "julian-day"]).unwrap();
        assert!(run(cli).is_err());
    }
}
