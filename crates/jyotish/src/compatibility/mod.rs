//! Ashtakoota marriage compatibility: eight kootas scored from the two Moon
//! placements, plus Manglik and Nadi dosha detection.

pub mod aggregator;
pub mod dosha;
pub mod koota;
pub mod tables;
pub mod types;

pub use aggregator::{CompatibilityAggregator, MatchRequest, PersonDetails};
pub use dosha::{DoshaDetector, ManglikStatus};
pub use koota::{KootaScorer, MoonProfile};
pub use types::{
    CompatibilityLevel, CompatibilityResult, DoshaRecord, DoshaType, KootaScore, KootaType,
    Severity, TOTAL_POINTS,
};
