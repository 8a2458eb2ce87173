use crate::ephemeris::Body;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Quincunx,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
}

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Sextile => "Sextile",
            Self::Square => "Square",
            Self::Trine => "Trine",
            Self::Opposition => "Opposition",
            Self::Quincunx => "Quincunx",
            Self::Semisextile => "Semisextile",
            Self::Semisquare => "Semisquare",
            Self::Sesquiquadrate => "Sesquiquadrate",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conjunction" => Ok(Self::Conjunction),
            "sextile" => Ok(Self::Sextile),
            "square" => Ok(Self::Square),
            "trine" => Ok(Self::Trine),
            "opposition" => Ok(Self::Opposition),
            "quincunx" => Ok(Self::Quincunx),
            "semisextile" => Ok(Self::Semisextile),
            "semisquare" => Ok(Self::Semisquare),
            "sesquiquadrate" => Ok(Self::Sesquiquadrate),
            other => Err(format!("unknown aspect '{}'", other)),
        }
    }
}

/// One row of the aspect table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    pub angle: f64,
    pub orb: f64,
}

/// A matched aspect between an ordered pair of bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub from: Body,
    pub to: Body,
    pub kind: AspectKind,
    /// Nominal angle of the aspect
    pub exact_angle: f64,
    /// Observed separation, [0, 180]
    pub separation: f64,
    /// |separation - exact_angle|
    pub orb: f64,
    pub applying: bool,
}

impl Aspect {
    /// Within 0.1 degrees of exact
    pub fn is_exact(&self) -> bool {
        self.orb < 0.1
    }
}
