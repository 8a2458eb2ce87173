use thiserror::Error;

/// Rejected request input. Raised before any chart computation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("Invalid date format '{value}'. Use YYYY-MM-DD format")]
    Date { value: String },
    #[error("Invalid time format '{value}'. Use HH:MM format (24-hour)")]
    Time { value: String },
    #[error("Invalid latitude {value}. Must be between -90 and +90 degrees")]
    Latitude { value: f64 },
    #[error("Invalid longitude {value}. Must be between -180 and +180 degrees")]
    Longitude { value: f64 },
    #[error("Invalid timezone '{value}'. Use standard timezone names like 'America/New_York'")]
    Timezone { value: String },
    #[error("Invalid house system: {value}. Valid systems: {valid:?}")]
    HouseSystem { value: String, valid: Vec<String> },
    #[error("Invalid ayanamsa: {value}. Valid ayanamsas: {valid:?}")]
    Ayanamsa { value: String, valid: Vec<String> },
    #[error("Input validation failed: {}", join_messages(.0))]
    Multiple(Vec<InvalidInputError>),
}

impl InvalidInputError {
    /// Name of the request field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Date { .. } => "birth_date",
            Self::Time { .. } => "birth_time",
            Self::Latitude { .. } => "latitude",
            Self::Longitude { .. } => "longitude",
            Self::Timezone { .. } => "timezone",
            Self::HouseSystem { .. } => "house_system",
            Self::Ayanamsa { .. } => "ayanamsa",
            Self::Multiple(_) => "multiple",
        }
    }

    /// Collapse a list of field errors. A single error is returned as is.
    pub fn from_many(mut errors: Vec<InvalidInputError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }
}

fn join_messages(errors: &[InvalidInputError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors reported by an ephemeris adapter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {jd}: {message}")]
    CalculationFailed {
        body: String,
        jd: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Invalid ephemeris fixture: {message}")]
    InvalidFixture { message: String },
    #[error("Sidereal mode {mode} is not available: {message}")]
    ModeUnavailable { mode: String, message: String },
    #[error("Ephemeris lock poisoned by a panicked computation")]
    Poisoned,
}

/// Whole-pipeline failure. No partial chart is ever returned alongside it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("Moon position not found in chart")]
    MissingMoon,
}
