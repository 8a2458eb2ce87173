use crate::ayanamsa::AyanamsaSystem;
use crate::ephemeris::{GeoLocation, HouseSystem};
use crate::error::InvalidInputError;
use crate::time::{parse_date, parse_time, parse_timezone, BirthMoment, TimeResolver};
use serde::{Deserialize, Serialize};

fn default_house_system() -> String {
    HouseSystem::default().slug().to_string()
}

fn default_ayanamsa() -> String {
    AyanamsaSystem::default().slug().to_string()
}

/// Birth chart request as received from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// YYYY-MM-DD
    pub birth_date: String,
    /// HH:MM, 24-hour
    pub birth_time: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default = "default_house_system")]
    pub house_system: String,
    #[serde(default = "default_ayanamsa")]
    pub ayanamsa: String,
}

/// A request whose every field has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedChartRequest {
    pub name: Option<String>,
    pub moment: BirthMoment,
    pub location: GeoLocation,
    pub house_system: HouseSystem,
    pub ayanamsa: AyanamsaSystem,
}

impl ChartRequest {
    pub fn new(birth_date: &str, birth_time: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: None,
            birth_date: birth_date.to_string(),
            birth_time: birth_time.to_string(),
            latitude,
            longitude,
            timezone: None,
            house_system: default_house_system(),
            ayanamsa: default_ayanamsa(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = Some(timezone.to_string());
        self
    }

    pub fn with_house_system(mut self, house_system: &str) -> Self {
        self.house_system = house_system.to_string();
        self
    }

    pub fn with_ayanamsa(mut self, ayanamsa: &str) -> Self {
        self.ayanamsa = ayanamsa.to_string();
        self
    }

    /// Check every field and report all failures at once.
    pub fn validate(&self) -> Result<ValidatedChartRequest, InvalidInputError> {
        let mut errors = Vec::new();

        let date = parse_date(&self.birth_date).map_err(|e| errors.push(e)).ok();
        let time = parse_time(&self.birth_time).map_err(|e| errors.push(e)).ok();

        if !(self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude)) {
            errors.push(InvalidInputError::Latitude {
                value: self.latitude,
            });
        }
        if !(self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude)) {
            errors.push(InvalidInputError::Longitude {
                value: self.longitude,
            });
        }

        let tz = match self.timezone.as_deref() {
            Some(name) => match parse_timezone(name) {
                Ok(tz) => Some(tz),
                Err(e) => {
                    errors.push(e);
                    None
                }
            },
            None => None,
        };

        let house_system = self
            .house_system
            .parse::<HouseSystem>()
            .map_err(|e| errors.push(e))
            .ok();
        let ayanamsa = self
            .ayanamsa
            .parse::<AyanamsaSystem>()
            .map_err(|e| errors.push(e))
            .ok();

        if let Some(err) = InvalidInputError::from_many(errors) {
            return Err(err);
        }

        match (date, time, house_system, ayanamsa) {
            (Some(date), Some(time), Some(house_system), Some(ayanamsa)) => {
                Ok(ValidatedChartRequest {
                    name: self.name.clone(),
                    moment: TimeResolver::resolve_parsed(date, time, tz),
                    location: GeoLocation {
                        lat: self.latitude,
                        lon: self.longitude,
                    },
                    house_system,
                    ayanamsa,
                })
            }
            _ => Err(InvalidInputError::Multiple(Vec::new())),
        }
    }
}
