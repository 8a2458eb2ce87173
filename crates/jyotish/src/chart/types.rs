use crate::aspects::Aspect;
use crate::ayanamsa::AyanamsaSystem;
use crate::ephemeris::{Body, GeoLocation, HouseSystem};
use crate::time::{BirthMoment, Warning};
use crate::vedic::NakshatraPlacement;
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved position of one body. `longitude` is sidereal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    pub tropical_longitude: f64,
    /// Sidereal longitude in [0, 360)
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    /// Degrees per day
    pub speed: f64,
    pub retrograde: bool,
    pub sign: ZodiacSign,
    /// Degree within sign, [0, 30)
    pub degree: f64,
    /// 1..=12
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub number: u8,
    /// Sidereal cusp longitude in [0, 360)
    pub cusp: f64,
    pub sign: ZodiacSign,
    pub ruler: Body,
}

/// Sidereal chart angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    pub imum_coeli: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    pub dominant_sign: Option<ZodiacSign>,
    pub dominant_house: Option<u8>,
    pub retrograde_count: usize,
    pub planets_by_sign: BTreeMap<ZodiacSign, usize>,
    pub planets_by_house: BTreeMap<u8, usize>,
    pub sun_sign: Option<ZodiacSign>,
    pub moon_sign: Option<ZodiacSign>,
    pub ascendant_sign: Option<ZodiacSign>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub moment: BirthMoment,
    pub location: GeoLocation,
    pub house_system: HouseSystem,
    pub ayanamsa: AyanamsaSystem,
    pub ayanamsa_value: f64,
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<HouseCusp>,
    pub angles: Angles,
    pub aspects: Vec<Aspect>,
    pub nakshatras: Vec<NakshatraPlacement>,
    pub summary: ChartSummary,
}

impl Chart {
    pub fn planet(&self, body: Body) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.body == body)
    }

    pub fn moon(&self) -> Option<&PlanetPosition> {
        self.planet(Body::Moon)
    }

    pub fn julian_day(&self) -> f64 {
        self.moment.julian_day
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.moment.warnings
    }
}
