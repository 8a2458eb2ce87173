pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, AspectCalculator, ASPECT_TABLE};
pub use types::{Aspect, AspectDefinition, AspectKind};
