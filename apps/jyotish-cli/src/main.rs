mod args;

use anyhow::Context;
use args::{Cli, Command};
use clap::Parser;
use jyotish::chart::ChartCalculator;
use jyotish::compatibility::{CompatibilityAggregator, MatchRequest};
use jyotish::ephemeris::{Ephemeris, FixtureEphemeris};
use jyotish_config::{load_config, JyotishConfig};
use std::path::PathBuf;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run<E: Ephemeris>(
    calculator: ChartCalculator<E>,
    command: &Command,
    house_system: &str,
    ayanamsa: &str,
) -> anyhow::Result<String> {
    match command {
        Command::Chart(person) => {
            let request = person
                .to_chart_request()
                .with_house_system(house_system)
                .with_ayanamsa(ayanamsa);
            let chart = calculator.calculate(&request)?;
            for warning in chart.warnings() {
                log::info!("{}", warning);
            }
            Ok(serde_json::to_string_pretty(&chart)?)
        }
        Command::Match(pair) => {
            let mut request = MatchRequest::new(pair.person1(), pair.person2());
            request.house_system = house_system.to_string();
            request.ayanamsa = ayanamsa.to_string();
            let result = CompatibilityAggregator::match_request(&calculator, &request)?;
            log::info!("{:.1}/36 points, {}", result.total_points, result.level);
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

fn fixture_path(cli: &Cli, config: &JyotishConfig) -> Option<PathBuf> {
    cli.fixture.clone().or_else(|| config.ephemeris.fixture.clone())
}

#[cfg(feature = "swisseph")]
fn swiss_output(
    cli: &Cli,
    config: &JyotishConfig,
    house_system: &str,
    ayanamsa: &str,
) -> anyhow::Result<String> {
    use jyotish::ephemeris::SwissEphemerisAdapter;

    let path = cli
        .ephemeris_path
        .clone()
        .or_else(|| config.ephemeris.path.clone());
    let adapter = SwissEphemerisAdapter::new(path).context("Failed to open Swiss Ephemeris")?;
    let calculator =
        ChartCalculator::new(adapter).with_aspect_calculator(config.aspect_calculator()?);
    run(calculator, &cli.command, house_system, ayanamsa)
}

#[cfg(not(feature = "swisseph"))]
fn swiss_output(
    _cli: &Cli,
    _config: &JyotishConfig,
    _house_system: &str,
    _ayanamsa: &str,
) -> anyhow::Result<String> {
    anyhow::bail!(
        "No ephemeris available: pass --fixture <file> or rebuild with the `swisseph` feature"
    )
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let house_system = cli
        .house_system
        .clone()
        .unwrap_or_else(|| config.chart.house_system.clone());
    let ayanamsa = cli
        .ayanamsa
        .clone()
        .unwrap_or_else(|| config.chart.ayanamsa.clone());

    let output = match fixture_path(&cli, &config) {
        Some(path) => {
            let fixture = FixtureEphemeris::from_path(&path)
                .with_context(|| format!("Failed to load fixture {}", path.display()))?;
            let calculator =
                ChartCalculator::new(fixture).with_aspect_calculator(config.aspect_calculator()?);
            run(calculator, &cli.command, &house_system, &ayanamsa)?
        }
        None => swiss_output(&cli, &config, &house_system, &ayanamsa)?,
    };

    println!("{}", output);
    Ok(())
}
