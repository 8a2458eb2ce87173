//! Ephemeris adapter boundary.
//!
//! Orbital mechanics are delegated to an external provider behind the
//! [`Ephemeris`] trait. The active sidereal frame is adapter-wide mutable
//! state, so adapters are shared through [`SharedEphemeris`], which hands
//! out exclusive access for each {set-mode, query} pair.

#[cfg(feature = "swisseph")]
pub mod adapter;
pub mod fixture;
pub mod shared;
pub mod types;

#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemerisAdapter;
pub use fixture::{FixtureEphemeris, FixtureFrame};
pub use shared::SharedEphemeris;
pub use types::{Body, EclipticPosition, GeoLocation, HouseFrame, HouseSystem, QUERIED_BODIES};

use crate::ayanamsa::AyanamsaSystem;
use crate::error::EphemerisError;

/// Contract consumed from an astronomical ephemeris provider.
///
/// All longitudes are tropical. `jd` is a Julian day in UT.
pub trait Ephemeris {
    fn body_position(&self, jd: f64, body: Body) -> Result<EclipticPosition, EphemerisError>;

    fn house_cusps(
        &self,
        jd: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseFrame, EphemerisError>;

    /// Select the sidereal frame used by subsequent [`Ephemeris::ayanamsa`] calls.
    fn set_sidereal_mode(&mut self, system: AyanamsaSystem) -> Result<(), EphemerisError>;

    /// Offset of the active sidereal frame at `jd`, in degrees.
    fn ayanamsa(&self, jd: f64) -> Result<f64, EphemerisError>;
}
