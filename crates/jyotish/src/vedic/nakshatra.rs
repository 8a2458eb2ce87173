//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters). The table also carries
//! the gana, yoni and nadi classes used by the compatibility kootas.

use crate::chart::PlanetPosition;
use crate::ephemeris::Body;
use crate::vedic::types::{Gana, Nadi, Yoni};
use crate::zodiac::normalize_degrees;
use serde::{Deserialize, Serialize};

pub const NAKSHATRA_COUNT: u8 = 27;
pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

// (slug, display name, lord, gana, yoni, nadi)
const NAKSHATRA_ORDER: [(&str, &str, Body, Gana, Yoni, Nadi); 27] = [
    ("ashwini", "Ashwini", Body::Ketu, Gana::Deva, Yoni::Horse, Nadi::Vata),
    ("bharani", "Bharani", Body::Venus, Gana::Manushya, Yoni::Elephant, Nadi::Pitta),
    ("krittika", "Krittika", Body::Sun, Gana::Rakshasa, Yoni::Goat, Nadi::Kapha),
    ("rohini", "Rohini", Body::Moon, Gana::Manushya, Yoni::Serpent, Nadi::Kapha),
    ("mrigashira", "Mrigashira", Body::Mars, Gana::Deva, Yoni::Serpent, Nadi::Pitta),
    ("ardra", "Ardra", Body::Rahu, Gana::Manushya, Yoni::Dog, Nadi::Vata),
    ("punarvasu", "Punarvasu", Body::Jupiter, Gana::Deva, Yoni::Cat, Nadi::Vata),
    ("pushya", "Pushya", Body::Saturn, Gana::Deva, Yoni::Goat, Nadi::Pitta),
    ("ashlesha", "Ashlesha", Body::Mercury, Gana::Rakshasa, Yoni::Cat, Nadi::Kapha),
    ("magha", "Magha", Body::Ketu, Gana::Rakshasa, Yoni::Rat, Nadi::Kapha),
    ("purva_phalguni", "Purva Phalguni", Body::Venus, Gana::Manushya, Yoni::Rat, Nadi::Pitta),
    ("uttara_phalguni", "Uttara Phalguni", Body::Sun, Gana::Manushya, Yoni::Cow, Nadi::Vata),
    ("hasta", "Hasta", Body::Moon, Gana::Deva, Yoni::Buffalo, Nadi::Vata),
    ("chitra", "Chitra", Body::Mars, Gana::Rakshasa, Yoni::Tiger, Nadi::Pitta),
    ("swati", "Swati", Body::Rahu, Gana::Deva, Yoni::Buffalo, Nadi::Kapha),
    ("vishakha", "Vishakha", Body::Jupiter, Gana::Rakshasa, Yoni::Tiger, Nadi::Kapha),
    ("anuradha", "Anuradha", Body::Saturn, Gana::Deva, Yoni::Deer, Nadi::Pitta),
    ("jyeshtha", "Jyeshtha", Body::Mercury, Gana::Rakshasa, Yoni::Deer, Nadi::Vata),
    ("mula", "Mula", Body::Ketu, Gana::Rakshasa, Yoni::Dog, Nadi::Vata),
    ("purva_ashadha", "Purva Ashadha", Body::Venus, Gana::Manushya, Yoni::Monkey, Nadi::Pitta),
    ("uttara_ashadha", "Uttara Ashadha", Body::Sun, Gana::Manushya, Yoni::Mongoose, Nadi::Kapha),
    ("shravana", "Shravana", Body::Moon, Gana::Deva, Yoni::Monkey, Nadi::Kapha),
    ("dhanishta", "Dhanishta", Body::Mars, Gana::Rakshasa, Yoni::Lion, Nadi::Pitta),
    ("shatabhisha", "Shatabhisha", Body::Rahu, Gana::Rakshasa, Yoni::Horse, Nadi::Vata),
    ("purva_bhadrapada", "Purva Bhadrapada", Body::Jupiter, Gana::Manushya, Yoni::Lion, Nadi::Vata),
    ("uttara_bhadrapada", "Uttara Bhadrapada", Body::Saturn, Gana::Manushya, Yoni::Cow, Nadi::Pitta),
    ("revati", "Revati", Body::Mercury, Gana::Deva, Yoni::Elephant, Nadi::Kapha),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nakshatra {
    /// 1..=27
    pub index: u8,
    pub id: String,
    pub name: String,
    pub lord: Body,
    pub gana: Gana,
    pub yoni: Yoni,
    pub nadi: Nadi,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    pub body: Body,
    pub longitude: f64,
    pub nakshatra_index: u8,
    pub nakshatra_name: String,
    pub lord: Body,
    /// 1..=4
    pub pada: u8,
    pub pada_fraction: f64,
}

fn build_nakshatra_table() -> Vec<Nakshatra> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, (slug, name, lord, gana, yoni, nadi))| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            Nakshatra {
                index: idx as u8 + 1,
                id: slug.to_string(),
                name: name.to_string(),
                lord: *lord,
                gana: *gana,
                yoni: *yoni,
                nadi: *nadi,
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<Nakshatra> = build_nakshatra_table();
}

/// Maps lunar longitude to a nakshatra.
pub struct NakshatraClassifier;

impl NakshatraClassifier {
    /// 1-based nakshatra index of a longitude, clamped to 1..=27.
    pub fn index_for_longitude(longitude: f64) -> u8 {
        let lon = normalize_degrees(longitude);
        let index = (lon / NAKSHATRA_SEGMENT_SIZE).floor() as i64 + 1;
        index.clamp(1, i64::from(NAKSHATRA_COUNT)) as u8
    }

    /// Pada (1..=4) and the fraction of it already traversed.
    pub fn pada_for_longitude(longitude: f64) -> (u8, f64) {
        let lon = normalize_degrees(longitude);
        let start = f64::from(Self::index_for_longitude(lon) - 1) * NAKSHATRA_SEGMENT_SIZE;
        let offset = (lon - start).max(0.0);
        let pada = ((offset / PADA_SIZE).floor() as u8).min(3) + 1;
        let fraction = (offset - f64::from(pada - 1) * PADA_SIZE) / PADA_SIZE;
        (pada, fraction.clamp(0.0, 1.0))
    }
}

/// Table row for a 1-based index. Out-of-range indices are clamped.
pub fn nakshatra_by_index(index: u8) -> &'static Nakshatra {
    let idx = usize::from(index.clamp(1, NAKSHATRA_COUNT)) - 1;
    &NAKSHATRA_TABLE[idx]
}

pub fn nakshatra_for_longitude(longitude: f64) -> &'static Nakshatra {
    nakshatra_by_index(NakshatraClassifier::index_for_longitude(longitude))
}

fn build_placement(body: Body, longitude: f64) -> NakshatraPlacement {
    let entry = nakshatra_for_longitude(longitude);
    let (pada, pada_fraction) = NakshatraClassifier::pada_for_longitude(longitude);
    NakshatraPlacement {
        body,
        longitude: normalize_degrees(longitude),
        nakshatra_index: entry.index,
        nakshatra_name: entry.name.clone(),
        lord: entry.lord,
        pada,
        pada_fraction,
    }
}

/// Nakshatra and pada of every body, in chart order.
pub fn annotate_chart_nakshatras(planets: &[PlanetPosition]) -> Vec<NakshatraPlacement> {
    planets
        .iter()
        .map(|p| build_placement(p.body, p.longitude))
        .collect()
}
