use clap::{Args, Parser, Subcommand};
use jyotish::chart::ChartRequest;
use jyotish::compatibility::PersonDetails;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sidereal birth charts and Ashtakoota matching")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (default: configs/jyotish.toml or $JYOTISH_CONFIG).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Replay ephemeris fixture (JSON) instead of Swiss Ephemeris.
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// Swiss Ephemeris data directory.
    #[arg(long, global = true)]
    pub ephemeris_path: Option<PathBuf>,

    /// House system, e.g. placidus, koch, equal, whole_sign.
    #[arg(long, global = true)]
    pub house_system: Option<String>,

    /// Sidereal frame, e.g. lahiri, raman, krishnamurti.
    #[arg(long, global = true)]
    pub ayanamsa: Option<String>,

    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Compute one birth chart.
    Chart(PersonArgs),
    /// Score the compatibility of two persons.
    Match(MatchArgs),
}

#[derive(Args, Debug, Clone)]
pub(crate) struct PersonArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// Birth date, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,
    /// Birth time, HH:MM (24-hour).
    #[arg(long)]
    pub time: String,
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    /// IANA timezone, e.g. Asia/Kolkata. UTC when omitted.
    #[arg(long)]
    pub tz: Option<String>,
}

impl PersonArgs {
    pub fn to_chart_request(&self) -> ChartRequest {
        ChartRequest {
            name: self.name.clone(),
            timezone: self.tz.clone(),
            ..ChartRequest::new(&self.date, &self.time, self.lat, self.lon)
        }
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct MatchArgs {
    #[arg(long)]
    pub p1_name: Option<String>,
    #[arg(long)]
    pub p1_date: String,
    #[arg(long)]
    pub p1_time: String,
    #[arg(long, allow_hyphen_values = true)]
    pub p1_lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub p1_lon: f64,
    #[arg(long)]
    pub p1_tz: Option<String>,

    #[arg(long)]
    pub p2_name: Option<String>,
    #[arg(long)]
    pub p2_date: String,
    #[arg(long)]
    pub p2_time: String,
    #[arg(long, allow_hyphen_values = true)]
    pub p2_lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub p2_lon: f64,
    #[arg(long)]
    pub p2_tz: Option<String>,
}

impl MatchArgs {
    pub fn person1(&self) -> PersonDetails {
        PersonDetails {
            name: self.p1_name.clone(),
            birth_date: self.p1_date.clone(),
            birth_time: self.p1_time.clone(),
            latitude: self.p1_lat,
            longitude: self.p1_lon,
            timezone: self.p1_tz.clone(),
        }
    }

    pub fn person2(&self) -> PersonDetails {
        PersonDetails {
            name: self.p2_name.clone(),
            birth_date: self.p2_date.clone(),
            birth_time: self.p2_time.clone(),
            latitude: self.p2_lat,
            longitude: self.p2_lon,
            timezone: self.p2_tz.clone(),
        }
    }
}
