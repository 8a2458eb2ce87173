use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bodies resolved for every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Lunar north node (true node).
    Rahu,
    /// Lunar south node. Never queried; derived from Rahu.
    Ketu,
}

/// Bodies that are looked up in the ephemeris, in chart order.
pub const QUERIED_BODIES: [Body; 11] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Rahu,
];

impl Body {
    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Whether the body is synthesized rather than queried.
    pub fn is_virtual(self) -> bool {
        matches!(self, Self::Ketu)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// House system selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    Placidus,
    Koch,
    Equal,
    WholeSign,
    Campanus,
    Regiomontanus,
}

const HOUSE_SYSTEMS: &[(&str, HouseSystem)] = &[
    ("placidus", HouseSystem::Placidus),
    ("koch", HouseSystem::Koch),
    ("equal", HouseSystem::Equal),
    ("whole_sign", HouseSystem::WholeSign),
    ("campanus", HouseSystem::Campanus),
    ("regiomontanus", HouseSystem::Regiomontanus),
];

impl HouseSystem {
    /// Single-letter code understood by Swiss Ephemeris.
    pub fn code(self) -> u8 {
        match self {
            Self::Placidus => b'P',
            Self::Koch => b'K',
            Self::Equal => b'E',
            Self::WholeSign => b'W',
            Self::Campanus => b'C',
            Self::Regiomontanus => b'R',
        }
    }

    pub fn slug(self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, system)| *system == self)
            .map(|(slug, _)| *slug)
            .unwrap_or("placidus")
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        Self::Placidus
    }
}

impl FromStr for HouseSystem {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = selector_key(s);
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, system)| *system)
            .ok_or_else(|| InvalidInputError::HouseSystem {
                value: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

/// Lowercase a selector, fold separators into underscores and drop dots.
pub(crate) fn selector_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '-' | '/' => '_',
            c => c,
        })
        .filter(|c| *c != '.')
        .collect()
}

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Tropical ecliptic position as reported by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
    /// Distance in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
}

/// Tropical house cusps and angles for one instant and location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    /// Cusps of houses 1..12
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_system_parsing() {
        assert_eq!("Placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!("Whole Sign".parse::<HouseSystem>().unwrap(), HouseSystem::WholeSign);
        assert_eq!("whole-sign".parse::<HouseSystem>().unwrap(), HouseSystem::WholeSign);
        assert_eq!("REGIOMONTANUS".parse::<HouseSystem>().unwrap(), HouseSystem::Regiomontanus);
        let err = "topocentric".parse::<HouseSystem>().unwrap_err();
        assert_eq!(err.field(), "house_system");
    }

    #[test]
    fn test_house_codes() {
        assert_eq!(HouseSystem::Placidus.code(), b'P');
        assert_eq!(HouseSystem::WholeSign.code(), b'W');
        assert_eq!(HouseSystem::Campanus.slug(), "campanus");
    }

    #[test]
    fn test_only_ketu_is_virtual() {
        assert!(Body::Ketu.is_virtual());
        assert!(QUERIED_BODIES.iter().all(|b| !b.is_virtual()));
    }
}
