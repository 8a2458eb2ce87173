//! Replay adapter serving tabulated positions.
//!
//! A fixture is a list of frames, each holding the tropical positions and
//! house cusps precomputed for one Julian day. Queries pick the nearest
//! frame within the tolerance. Location and house system are not part of
//! the lookup key: a frame carries the single cusp set it was recorded with.
//! The ayanamsa comes from the reference-epoch model of the active frame.

use crate::ayanamsa::AyanamsaSystem;
use crate::ephemeris::{Body, EclipticPosition, Ephemeris, GeoLocation, HouseFrame, HouseSystem};
use crate::error::EphemerisError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One minute
pub const DEFAULT_TOLERANCE_DAYS: f64 = 1.0 / 1440.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureFrame {
    pub jd: f64,
    pub bodies: BTreeMap<Body, EclipticPosition>,
    pub houses: HouseFrame,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureEphemeris {
    frames: Vec<FixtureFrame>,
    #[serde(default = "default_tolerance")]
    tolerance_days: f64,
    #[serde(skip)]
    current_sidereal_mode: Option<AyanamsaSystem>,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE_DAYS
}

impl FixtureEphemeris {
    pub fn new(frames: Vec<FixtureFrame>) -> Self {
        Self {
            frames,
            tolerance_days: DEFAULT_TOLERANCE_DAYS,
            current_sidereal_mode: None,
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, EphemerisError> {
        serde_json::from_str(text).map_err(|e| EphemerisError::InvalidFixture {
            message: e.to_string(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, EphemerisError> {
        let text = fs::read_to_string(path).map_err(|e| EphemerisError::FileNotFound {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let fixture = Self::from_json_str(&text)?;
        log::debug!("loaded {} ephemeris frames from {}", fixture.frames.len(), path.display());
        Ok(fixture)
    }

    pub fn current_sidereal_mode(&self) -> Option<AyanamsaSystem> {
        self.current_sidereal_mode
    }

    fn frame_at(&self, jd: f64) -> Option<&FixtureFrame> {
        self.frames
            .iter()
            .filter(|frame| (frame.jd - jd).abs() <= self.tolerance_days)
            .min_by(|a, b| (a.jd - jd).abs().total_cmp(&(b.jd - jd).abs()))
    }
}

impl Ephemeris for FixtureEphemeris {
    fn body_position(&self, jd: f64, body: Body) -> Result<EclipticPosition, EphemerisError> {
        let frame = self.frame_at(jd).ok_or_else(|| EphemerisError::CalculationFailed {
            body: body.name().to_string(),
            jd,
            message: "no fixture frame near this Julian day".to_string(),
        })?;
        frame
            .bodies
            .get(&body)
            .copied()
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body: body.name().to_string(),
                jd,
                message: "body missing from fixture frame".to_string(),
            })
    }

    fn house_cusps(
        &self,
        jd: f64,
        _location: &GeoLocation,
        _system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError> {
        self.frame_at(jd)
            .map(|frame| frame.houses)
            .ok_or_else(|| EphemerisError::HouseCalculationFailed {
                message: format!("no fixture frame near JD {}", jd),
            })
    }

    fn set_sidereal_mode(&mut self, system: AyanamsaSystem) -> Result<(), EphemerisError> {
        self.current_sidereal_mode = Some(system);
        Ok(())
    }

    fn ayanamsa(&self, jd: f64) -> Result<f64, EphemerisError> {
        self.current_sidereal_mode
            .map(|system| system.mean_offset(jd))
            .ok_or_else(|| EphemerisError::ModeUnavailable {
                mode: "none".to_string(),
                message: "set_sidereal_mode must be called first".to_string(),
            })
    }
}
