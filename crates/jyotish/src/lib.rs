//! Sidereal birth charts and Ashtakoota (eight-factor) marriage compatibility.
//!
//! Astronomy is delegated to an [`ephemeris::Ephemeris`] adapter. Everything
//! on top of it (time resolution, sidereal correction, house placement,
//! aspects, nakshatras, koota scoring and doshas) lives here.

pub mod aspects;
pub mod ayanamsa;
pub mod chart;
pub mod compatibility;
pub mod ephemeris;
pub mod error;
pub mod time;
pub mod vedic;
pub mod zodiac;

pub use aspects::{Aspect, AspectCalculator, AspectKind};
pub use ayanamsa::{AyanamsaCalculator, AyanamsaSystem};
pub use chart::{Chart, ChartCalculator, ChartRequest, PlanetPosition};
pub use compatibility::{
    CompatibilityAggregator, CompatibilityLevel, CompatibilityResult, MatchRequest,
    PersonDetails,
};
pub use ephemeris::{Body, Ephemeris, FixtureEphemeris, HouseSystem, SharedEphemeris};
pub use error::{ChartError, EphemerisError, InvalidInputError};
pub use time::{BirthMoment, TimeResolver, Warning};
pub use zodiac::ZodiacSign;
