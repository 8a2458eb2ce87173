use jyotish::aspects::{AspectCalculator, AspectKind};
use jyotish::ayanamsa::AyanamsaSystem;
use jyotish::ephemeris::HouseSystem;
use jyotish::error::InvalidInputError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "JYOTISH_CONFIG";

const CANDIDATE_PATHS: [&str; 2] = ["configs/jyotish.toml", "../../configs/jyotish.toml"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartDefaults {
    pub house_system: String,
    pub ayanamsa: String,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::default().slug().to_string(),
            ayanamsa: AyanamsaSystem::default().slug().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EphemerisSettings {
    /// Swiss Ephemeris data directory
    pub path: Option<PathBuf>,
    /// Replay fixture used instead of Swiss Ephemeris
    pub fixture: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AspectSettings {
    pub orbs: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct JyotishConfig {
    pub chart: ChartDefaults,
    pub ephemeris: EphemerisSettings,
    pub aspects: AspectSettings,
}

impl JyotishConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse jyotish config: {e}"))
    }

    pub fn house_system(&self) -> Result<HouseSystem, InvalidInputError> {
        self.chart.house_system.parse()
    }

    pub fn ayanamsa(&self) -> Result<AyanamsaSystem, InvalidInputError> {
        self.chart.ayanamsa.parse()
    }

    /// Aspect calculator with the configured orb overrides applied.
    pub fn aspect_calculator(&self) -> anyhow::Result<AspectCalculator> {
        let mut orbs = HashMap::new();
        for (name, orb) in &self.aspects.orbs {
            let kind: AspectKind = name
                .parse()
                .map_err(|e| anyhow::anyhow!("[aspects.orbs] {e}"))?;
            if !(orb.is_finite() && *orb >= 0.0) {
                anyhow::bail!("[aspects.orbs] orb for {name} must be a non-negative number");
            }
            orbs.insert(kind, *orb);
        }
        Ok(AspectCalculator::with_orbs(&orbs))
    }
}

/// Read config text from an explicit path, `JYOTISH_CONFIG`, or the usual
/// relative locations. `None` when no file exists anywhere.
pub fn read_config_text(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    let required = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    if let Some(path) = required {
        let text = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return Ok(Some((path, text)));
    }

    for p in &CANDIDATE_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), text)));
        }
    }
    Ok(None)
}

pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<JyotishConfig> {
    match read_config_text(explicit)? {
        Some((path, text)) => {
            log::debug!("loading config from {}", path.display());
            JyotishConfig::from_toml_str(&text)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
        }
        None => {
            log::debug!("no config file found in {:?}, using defaults", CANDIDATE_PATHS);
            Ok(JyotishConfig::default())
        }
    }
}
