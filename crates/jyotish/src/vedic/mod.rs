pub mod nakshatra;
pub mod types;

pub use nakshatra::{
    annotate_chart_nakshatras, nakshatra_by_index, nakshatra_for_longitude, Nakshatra,
    NakshatraClassifier, NakshatraPlacement, NAKSHATRA_SEGMENT_SIZE, PADA_SIZE,
};
pub use types::{Gana, Nadi, Yoni};
