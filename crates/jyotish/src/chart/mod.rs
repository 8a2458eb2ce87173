//! Birth chart computation.
//!
//! [`ChartCalculator`] validates a [`ChartRequest`], resolves the birth
//! moment, queries the ephemeris and assembles a [`Chart`]. Any failing stage
//! fails the whole computation.

pub mod calculator;
pub mod houses;
pub mod planets;
pub mod request;
pub mod summary;
pub mod types;

pub use calculator::ChartCalculator;
pub use houses::{build_house_cusps, house_for_longitude};
pub use planets::PlanetPositionResolver;
pub use request::{ChartRequest, ValidatedChartRequest};
pub use summary::ChartSummarizer;
pub use types::{Angles, Chart, ChartSummary, HouseCusp, PlanetPosition};
