//! House placement with 0°/360° wraparound.

use crate::chart::types::HouseCusp;
use crate::zodiac::{normalize_degrees, ZodiacSign};

/// House (1..=12) containing `longitude` for the given cusps.
///
/// A house whose cusp is numerically greater than the next one spans the
/// seam and owns `[cur, 360) ∪ [0, next)`. Falls back to house 1 when no
/// house matches, which only happens for a malformed cusp set.
pub fn house_for_longitude(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let longitude = normalize_degrees(longitude);

    for i in 0..12 {
        let cur = normalize_degrees(cusps[i]);
        let next = normalize_degrees(cusps[(i + 1) % 12]);

        let inside = if cur > next {
            longitude >= cur || longitude < next
        } else {
            cur <= longitude && longitude < next
        };
        if inside {
            return i as u8 + 1;
        }
    }

    1
}

/// Sidereal house records from tropical cusps.
pub fn build_house_cusps(tropical_cusps: &[f64; 12], ayanamsa: f64) -> Vec<HouseCusp> {
    tropical_cusps
        .iter()
        .enumerate()
        .map(|(i, tropical)| {
            let cusp = normalize_degrees(tropical - ayanamsa);
            let sign = ZodiacSign::from_longitude(cusp);
            HouseCusp {
                number: i as u8 + 1,
                cusp,
                sign,
                ruler: sign.ruler(),
            }
        })
        .collect()
}

pub fn cusp_longitudes(houses: &[HouseCusp]) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for house in houses.iter().take(12) {
        cusps[usize::from(house.number - 1) % 12] = house.cusp;
    }
    cusps
}
